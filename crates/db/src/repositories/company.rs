//! Company repository for database operations.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use transco_core::query::{CompanyField, ListQuery};
use transco_shared::types::{CompanyId, PageRequest};
use uuid::Uuid;

use super::listing::apply_list_query;
use crate::entities::companies;

/// Error types for company operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    /// Company not found.
    #[error("Company not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

const fn company_column(field: CompanyField) -> companies::Column {
    match field {
        CompanyField::Name => companies::Column::Name,
    }
}

/// Company repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of companies matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        query: &ListQuery<CompanyField>,
        page: PageRequest,
    ) -> Result<Vec<companies::Model>, DbErr> {
        apply_list_query(
            companies::Entity::find(),
            query,
            company_column,
            companies::Column::Id,
            page,
        )
        .all(&self.db)
        .await
    }

    /// Finds a company by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<companies::Model>, DbErr> {
        companies::Entity::find_by_id(id).one(&self.db).await
    }

    /// Checks whether a company exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = companies::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    /// Creates a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, name: &str) -> Result<companies::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let company = companies::ActiveModel {
            id: Set(CompanyId::new().into_inner()),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(company_id = %company.id, "Company created");
        Ok(company)
    }

    /// Renames a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the update fails.
    pub async fn update(&self, id: Uuid, name: &str) -> Result<companies::Model, CompanyError> {
        let company = companies::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CompanyError::NotFound(id))?;

        let mut active: companies::ActiveModel = company.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a company together with its drivers, vehicles and transports.
    ///
    /// Deleting a missing company is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        let result = companies::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(company_id = %id, "Company deleted");
        }
        Ok(())
    }
}
