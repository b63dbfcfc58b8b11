//! Qualification repository, including the driver-qualification association.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use transco_shared::types::QualificationId;
use uuid::Uuid;

use crate::entities::{driver_qualifications, drivers, qualifications};

/// Error types for qualification operations.
#[derive(Debug, thiserror::Error)]
pub enum QualificationError {
    /// Driver not found.
    #[error("Driver not found: {0}")]
    DriverNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Qualification repository.
#[derive(Debug, Clone)]
pub struct QualificationRepository {
    db: DatabaseConnection,
}

impl QualificationRepository {
    /// Creates a new qualification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all qualifications by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<qualifications::Model>, DbErr> {
        qualifications::Entity::find()
            .order_by_asc(qualifications::Column::Kind)
            .all(&self.db)
            .await
    }

    /// Finds a qualification by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<qualifications::Model>, DbErr> {
        qualifications::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists the qualifications a driver holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver does not exist or the query fails.
    pub async fn list_for_driver(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<qualifications::Model>, QualificationError> {
        let driver = drivers::Entity::find_by_id(driver_id)
            .one(&self.db)
            .await?
            .ok_or(QualificationError::DriverNotFound(driver_id))?;

        Ok(driver
            .find_related(qualifications::Entity)
            .order_by_asc(qualifications::Column::Kind)
            .all(&self.db)
            .await?)
    }

    /// Gives a driver the qualification of type `kind`.
    ///
    /// The qualification is shared between drivers: an existing one of the
    /// same type is reused, otherwise it is created. Attaching a
    /// qualification the driver already holds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver does not exist or the database write
    /// fails.
    pub async fn attach(
        &self,
        driver_id: Uuid,
        kind: &str,
    ) -> Result<qualifications::Model, QualificationError> {
        let txn = self.db.begin().await?;

        let driver_count = drivers::Entity::find_by_id(driver_id).count(&txn).await?;
        if driver_count == 0 {
            return Err(QualificationError::DriverNotFound(driver_id));
        }

        let now = chrono::Utc::now().into();
        let existing = qualifications::Entity::find()
            .filter(qualifications::Column::Kind.eq(kind))
            .one(&txn)
            .await?;
        let qualification = match existing {
            Some(q) => q,
            None => {
                qualifications::ActiveModel {
                    id: Set(QualificationId::new().into_inner()),
                    kind: Set(kind.to_string()),
                    created_at: Set(now),
                }
                .insert(&txn)
                .await?
            }
        };

        let held = driver_qualifications::Entity::find_by_id((driver_id, qualification.id))
            .count(&txn)
            .await?
            > 0;
        if !held {
            driver_qualifications::ActiveModel {
                driver_id: Set(driver_id),
                qualification_id: Set(qualification.id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        tracing::info!(%driver_id, qualification_id = %qualification.id, "Qualification attached");
        Ok(qualification)
    }

    /// Takes a qualification away from a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn detach(&self, driver_id: Uuid, qualification_id: Uuid) -> Result<(), DbErr> {
        driver_qualifications::Entity::delete_many()
            .filter(driver_qualifications::Column::DriverId.eq(driver_id))
            .filter(driver_qualifications::Column::QualificationId.eq(qualification_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
