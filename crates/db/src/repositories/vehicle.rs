//! Vehicle repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use transco_shared::types::{PageRequest, VehicleId};
use uuid::Uuid;

use super::is_foreign_key_violation;
use crate::entities::{companies, sea_orm_active_enums::VehicleType, vehicles};

/// Error types for vehicle operations.
#[derive(Debug, thiserror::Error)]
pub enum VehicleError {
    /// Vehicle not found.
    #[error("Vehicle not found: {0}")]
    NotFound(Uuid),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(Uuid),

    /// Transports still reference the vehicle.
    #[error("vehicle is referenced by transports")]
    InUse,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for registering or updating a vehicle.
#[derive(Debug, Clone)]
pub struct VehicleInput {
    /// Registration plate.
    pub registration: String,
    /// Bus or truck.
    pub vehicle_type: VehicleType,
    /// Seats for a bus, kilograms for a truck.
    pub capacity: i32,
}

/// Vehicle repository.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    db: DatabaseConnection,
}

impl VehicleRepository {
    /// Creates a new vehicle repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of a company's fleet.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the query fails.
    pub async fn list_for_company(
        &self,
        company_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<vehicles::Model>, VehicleError> {
        self.ensure_company(company_id).await?;

        Ok(vehicles::Entity::find()
            .filter(vehicles::Column::CompanyId.eq(company_id))
            .order_by_asc(vehicles::Column::Registration)
            .order_by_asc(vehicles::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?)
    }

    /// Finds a vehicle by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<vehicles::Model>, DbErr> {
        vehicles::Entity::find_by_id(id).one(&self.db).await
    }

    /// Registers a vehicle in a company's fleet.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the insert fails.
    pub async fn create(
        &self,
        company_id: Uuid,
        input: VehicleInput,
    ) -> Result<vehicles::Model, VehicleError> {
        self.ensure_company(company_id).await?;

        let now = chrono::Utc::now().into();
        let vehicle = vehicles::ActiveModel {
            id: Set(VehicleId::new().into_inner()),
            company_id: Set(company_id),
            registration: Set(input.registration),
            vehicle_type: Set(input.vehicle_type),
            capacity: Set(input.capacity),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(%company_id, vehicle_id = %vehicle.id, "Vehicle registered");
        Ok(vehicle)
    }

    /// Replaces a vehicle's registration, type and capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle does not exist or the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: VehicleInput,
    ) -> Result<vehicles::Model, VehicleError> {
        let vehicle = vehicles::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(VehicleError::NotFound(id))?;

        let mut active: vehicles::ActiveModel = vehicle.into();
        active.registration = Set(input.registration);
        active.vehicle_type = Set(input.vehicle_type);
        active.capacity = Set(input.capacity);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a vehicle.
    ///
    /// Deleting a missing vehicle is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a transport references the vehicle or the delete
    /// fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), VehicleError> {
        vehicles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    VehicleError::InUse
                } else {
                    VehicleError::Database(e)
                }
            })?;
        Ok(())
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), VehicleError> {
        let count = companies::Entity::find_by_id(company_id)
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(VehicleError::CompanyNotFound(company_id));
        }
        Ok(())
    }
}
