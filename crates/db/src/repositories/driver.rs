//! Driver repository for database operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, LoaderTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use transco_core::query::{DriverField, ListQuery};
use transco_shared::types::{DriverId, PageRequest};
use uuid::Uuid;

use super::{is_foreign_key_violation, listing::apply_list_query};
use crate::entities::{companies, driver_qualifications, drivers, qualifications};

/// Error types for driver operations.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Driver not found.
    #[error("Driver not found: {0}")]
    NotFound(Uuid),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(Uuid),

    /// Transports still reference the driver.
    #[error("driver is referenced by transports")]
    InUse,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for hiring or updating a driver.
#[derive(Debug, Clone)]
pub struct DriverInput {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Monthly salary.
    pub salary: Decimal,
}

/// A driver with its qualifications.
#[derive(Debug, Clone)]
pub struct DriverWithQualifications {
    /// The driver.
    pub driver: drivers::Model,
    /// Qualifications held.
    pub qualifications: Vec<qualifications::Model>,
}

/// A driver with its employer and qualifications.
#[derive(Debug, Clone)]
pub struct DriverDetails {
    /// The driver.
    pub driver: drivers::Model,
    /// Employing company.
    pub company: companies::Model,
    /// Qualifications held.
    pub qualifications: Vec<qualifications::Model>,
}

const fn driver_column(field: DriverField) -> drivers::Column {
    match field {
        DriverField::FirstName => drivers::Column::FirstName,
        DriverField::LastName => drivers::Column::LastName,
        DriverField::Salary => drivers::Column::Salary,
    }
}

/// Driver repository.
#[derive(Debug, Clone)]
pub struct DriverRepository {
    db: DatabaseConnection,
}

impl DriverRepository {
    /// Creates a new driver repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of a company's drivers with their qualifications.
    ///
    /// With `qualification`, only drivers holding a qualification of exactly
    /// that type are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the query fails.
    pub async fn list_for_company(
        &self,
        company_id: Uuid,
        qualification: Option<&str>,
        query: &ListQuery<DriverField>,
        page: PageRequest,
    ) -> Result<Vec<DriverWithQualifications>, DriverError> {
        self.ensure_company(company_id).await?;

        let mut select =
            drivers::Entity::find().filter(drivers::Column::CompanyId.eq(company_id));

        if let Some(kind) = qualification {
            let Some(qualification) = qualifications::Entity::find()
                .filter(qualifications::Column::Kind.eq(kind))
                .one(&self.db)
                .await?
            else {
                return Ok(Vec::new());
            };
            select = select
                .inner_join(driver_qualifications::Entity)
                .filter(driver_qualifications::Column::QualificationId.eq(qualification.id));
        }

        let drivers = apply_list_query(select, query, driver_column, drivers::Column::Id, page)
            .all(&self.db)
            .await?;

        let qualifications = drivers
            .load_many_to_many(
                qualifications::Entity,
                driver_qualifications::Entity,
                &self.db,
            )
            .await?;

        Ok(drivers
            .into_iter()
            .zip(qualifications)
            .map(|(driver, qualifications)| DriverWithQualifications {
                driver,
                qualifications,
            })
            .collect())
    }

    /// Finds a driver by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<drivers::Model>, DbErr> {
        drivers::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a driver with its company and qualifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_details(&self, id: Uuid) -> Result<Option<DriverDetails>, DbErr> {
        let Some((driver, Some(company))) = drivers::Entity::find_by_id(id)
            .find_also_related(companies::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let qualifications = driver
            .find_related(qualifications::Entity)
            .order_by_asc(qualifications::Column::Kind)
            .all(&self.db)
            .await?;

        Ok(Some(DriverDetails {
            driver,
            company,
            qualifications,
        }))
    }

    /// Hires a driver for a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the insert fails.
    pub async fn create(
        &self,
        company_id: Uuid,
        input: DriverInput,
    ) -> Result<drivers::Model, DriverError> {
        self.ensure_company(company_id).await?;

        let now = chrono::Utc::now().into();
        let driver = drivers::ActiveModel {
            id: Set(DriverId::new().into_inner()),
            company_id: Set(company_id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            salary: Set(input.salary),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(%company_id, driver_id = %driver.id, "Driver hired");
        Ok(driver)
    }

    /// Replaces a driver's name and salary.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver does not exist or the update fails.
    pub async fn update(&self, id: Uuid, input: DriverInput) -> Result<drivers::Model, DriverError> {
        let driver = drivers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DriverError::NotFound(id))?;

        let mut active: drivers::ActiveModel = driver.into();
        active.first_name = Set(input.first_name);
        active.last_name = Set(input.last_name);
        active.salary = Set(input.salary);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a driver.
    ///
    /// Deleting a missing driver is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a transport references the driver or the delete
    /// fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), DriverError> {
        drivers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DriverError::InUse
                } else {
                    DriverError::Database(e)
                }
            })?;
        Ok(())
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), DriverError> {
        let count = companies::Entity::find_by_id(company_id)
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(DriverError::CompanyNotFound(company_id));
        }
        Ok(())
    }
}
