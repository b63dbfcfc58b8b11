//! Cargo and passenger transport repository.
//!
//! Both kinds share one input shape and are returned as [`TransportRecord`]s;
//! the kind-specific payload lives in [`TransportDetails`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use transco_core::query::{ListQuery, TransportField};
use transco_core::transport::{
    DriverRef, TransportDetails, TransportKind, TransportRecord, TransportRuleError,
    check_assignment,
};
use transco_shared::types::{PageRequest, TransportId};
use uuid::Uuid;

use super::listing::apply_list_query;
use crate::entities::{
    cargo_transports, companies, company_customers, drivers, passenger_transports, vehicles,
};

/// Error types for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Transport not found.
    #[error("Transport not found: {0}")]
    NotFound(Uuid),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(Uuid),

    /// The driver does not work for the company.
    #[error("no such driver working for the company")]
    NoSuchDriver,

    /// The customer is not one of the company's customers.
    #[error("the company has no such customer")]
    NoSuchCustomer,

    /// The vehicle is not part of the company's fleet.
    #[error("the company does not own such vehicle")]
    NoSuchVehicle,

    /// The vehicle cannot perform the transport.
    #[error(transparent)]
    Rule(#[from] TransportRuleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating or updating a transport.
#[derive(Debug, Clone)]
pub struct TransportInput {
    /// Driver performing the transport.
    pub driver_id: Uuid,
    /// Customer ordering the transport.
    pub customer_id: Uuid,
    /// Vehicle used.
    pub vehicle_id: Uuid,
    /// Pick-up address.
    pub start_address: String,
    /// Destination address.
    pub end_address: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day.
    pub end_date: NaiveDate,
    /// Agreed price.
    pub price: Decimal,
    /// Kind-specific payload; decides which table is written.
    pub details: TransportDetails,
}

/// Filters for listing a company's transports.
#[derive(Debug, Clone, Default)]
pub struct TransportFilter {
    /// Exact destination address.
    pub destination: Option<String>,
    /// Typed filters and ordering.
    pub query: ListQuery<TransportField>,
}

const fn cargo_column(field: TransportField) -> cargo_transports::Column {
    match field {
        TransportField::StartAddress => cargo_transports::Column::StartAddress,
        TransportField::EndAddress => cargo_transports::Column::EndAddress,
        TransportField::StartDate => cargo_transports::Column::StartDate,
        TransportField::EndDate => cargo_transports::Column::EndDate,
        TransportField::Price => cargo_transports::Column::Price,
    }
}

const fn passenger_column(field: TransportField) -> passenger_transports::Column {
    match field {
        TransportField::StartAddress => passenger_transports::Column::StartAddress,
        TransportField::EndAddress => passenger_transports::Column::EndAddress,
        TransportField::StartDate => passenger_transports::Column::StartDate,
        TransportField::EndDate => passenger_transports::Column::EndDate,
        TransportField::Price => passenger_transports::Column::Price,
    }
}

fn driver_ref(driver: &drivers::Model) -> DriverRef {
    DriverRef {
        id: driver.id.into(),
        name: driver.full_name(),
    }
}

/// Converts a cargo row and its driver into a record.
pub(crate) fn cargo_record(row: cargo_transports::Model, driver: &drivers::Model) -> TransportRecord {
    TransportRecord {
        id: row.id.into(),
        company_id: row.company_id.into(),
        start_address: row.start_address,
        end_address: row.end_address,
        start_date: row.start_date,
        end_date: row.end_date,
        price: row.price,
        is_paid: row.is_paid,
        driver: driver_ref(driver),
        customer_id: row.customer_id.into(),
        vehicle_id: row.vehicle_id.into(),
        details: TransportDetails::Cargo {
            cargo_type: row.cargo_type,
            cargo_weight: row.cargo_weight,
        },
    }
}

/// Converts a passenger row and its driver into a record.
pub(crate) fn passenger_record(
    row: passenger_transports::Model,
    driver: &drivers::Model,
) -> TransportRecord {
    TransportRecord {
        id: row.id.into(),
        company_id: row.company_id.into(),
        start_address: row.start_address,
        end_address: row.end_address,
        start_date: row.start_date,
        end_date: row.end_date,
        price: row.price,
        is_paid: row.is_paid,
        driver: driver_ref(driver),
        customer_id: row.customer_id.into(),
        vehicle_id: row.vehicle_id.into(),
        details: TransportDetails::Passenger {
            number_of_passengers: row.number_of_passengers,
        },
    }
}

/// Transport repository.
#[derive(Debug, Clone)]
pub struct TransportRepository {
    db: DatabaseConnection,
}

impl TransportRepository {
    /// Creates a new transport repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of a company's transports of one kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist or the query fails.
    pub async fn list_for_company(
        &self,
        company_id: Uuid,
        kind: TransportKind,
        filter: &TransportFilter,
        page: PageRequest,
    ) -> Result<Vec<TransportRecord>, TransportError> {
        self.ensure_company(company_id).await?;

        let records = match kind {
            TransportKind::Cargo => {
                let mut select = cargo_transports::Entity::find()
                    .filter(cargo_transports::Column::CompanyId.eq(company_id));
                if let Some(destination) = &filter.destination {
                    select = select.filter(cargo_transports::Column::EndAddress.eq(destination));
                }
                apply_list_query(
                    select,
                    &filter.query,
                    cargo_column,
                    cargo_transports::Column::Id,
                    page,
                )
                .find_also_related(drivers::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .filter_map(|(row, driver)| driver.map(|d| cargo_record(row, &d)))
                .collect()
            }
            TransportKind::Passenger => {
                let mut select = passenger_transports::Entity::find()
                    .filter(passenger_transports::Column::CompanyId.eq(company_id));
                if let Some(destination) = &filter.destination {
                    select =
                        select.filter(passenger_transports::Column::EndAddress.eq(destination));
                }
                apply_list_query(
                    select,
                    &filter.query,
                    passenger_column,
                    passenger_transports::Column::Id,
                    page,
                )
                .find_also_related(drivers::Entity)
                .all(&self.db)
                .await?
                .into_iter()
                .filter_map(|(row, driver)| driver.map(|d| passenger_record(row, &d)))
                .collect()
            }
        };

        Ok(records)
    }

    /// Finds a transport of one kind by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(
        &self,
        kind: TransportKind,
        id: Uuid,
    ) -> Result<Option<TransportRecord>, DbErr> {
        let record = match kind {
            TransportKind::Cargo => cargo_transports::Entity::find_by_id(id)
                .find_also_related(drivers::Entity)
                .one(&self.db)
                .await?
                .and_then(|(row, driver)| driver.map(|d| cargo_record(row, &d))),
            TransportKind::Passenger => passenger_transports::Entity::find_by_id(id)
                .find_also_related(drivers::Entity)
                .one(&self.db)
                .await?
                .and_then(|(row, driver)| driver.map(|d| passenger_record(row, &d))),
        };
        Ok(record)
    }

    /// Records a new, unpaid transport for a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company does not exist, a referenced driver,
    /// customer or vehicle does not belong to it, the vehicle cannot perform
    /// the transport, or the insert fails.
    pub async fn create(
        &self,
        company_id: Uuid,
        input: TransportInput,
    ) -> Result<TransportRecord, TransportError> {
        self.ensure_company(company_id).await?;
        let driver = self.validate_references(company_id, &input).await?;

        let id = TransportId::new().into_inner();
        let now = chrono::Utc::now().into();
        let kind = input.details.kind();

        let record = match input.details {
            TransportDetails::Cargo {
                cargo_type,
                cargo_weight,
            } => {
                let row = cargo_transports::ActiveModel {
                    id: Set(id),
                    company_id: Set(company_id),
                    driver_id: Set(input.driver_id),
                    customer_id: Set(input.customer_id),
                    vehicle_id: Set(input.vehicle_id),
                    start_address: Set(input.start_address),
                    end_address: Set(input.end_address),
                    start_date: Set(input.start_date),
                    end_date: Set(input.end_date),
                    price: Set(Some(input.price)),
                    is_paid: Set(false),
                    cargo_type: Set(cargo_type),
                    cargo_weight: Set(cargo_weight),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&self.db)
                .await?;
                cargo_record(row, &driver)
            }
            TransportDetails::Passenger {
                number_of_passengers,
            } => {
                let row = passenger_transports::ActiveModel {
                    id: Set(id),
                    company_id: Set(company_id),
                    driver_id: Set(input.driver_id),
                    customer_id: Set(input.customer_id),
                    vehicle_id: Set(input.vehicle_id),
                    start_address: Set(input.start_address),
                    end_address: Set(input.end_address),
                    start_date: Set(input.start_date),
                    end_date: Set(input.end_date),
                    price: Set(Some(input.price)),
                    is_paid: Set(false),
                    number_of_passengers: Set(number_of_passengers),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&self.db)
                .await?;
                passenger_record(row, &driver)
            }
        };

        tracing::info!(%company_id, transport_id = %id, %kind, "Transport created");
        Ok(record)
    }

    /// Replaces a transport's fields and paid flag.
    ///
    /// The kind of `input.details` selects which transport table is searched
    /// for `id`. The transport stays with its company.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport does not exist, a referenced driver,
    /// customer or vehicle does not belong to its company, the vehicle cannot
    /// perform the transport, or the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: TransportInput,
        is_paid: bool,
    ) -> Result<TransportRecord, TransportError> {
        let now = chrono::Utc::now().into();

        let record = match input.details.kind() {
            TransportKind::Cargo => {
                let existing = cargo_transports::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(TransportError::NotFound(id))?;
                let driver = self.validate_references(existing.company_id, &input).await?;

                let mut active: cargo_transports::ActiveModel = existing.into();
                active.driver_id = Set(input.driver_id);
                active.customer_id = Set(input.customer_id);
                active.vehicle_id = Set(input.vehicle_id);
                active.start_address = Set(input.start_address);
                active.end_address = Set(input.end_address);
                active.start_date = Set(input.start_date);
                active.end_date = Set(input.end_date);
                active.price = Set(Some(input.price));
                active.is_paid = Set(is_paid);
                if let TransportDetails::Cargo {
                    cargo_type,
                    cargo_weight,
                } = input.details
                {
                    active.cargo_type = Set(cargo_type);
                    active.cargo_weight = Set(cargo_weight);
                }
                active.updated_at = Set(now);

                cargo_record(active.update(&self.db).await?, &driver)
            }
            TransportKind::Passenger => {
                let existing = passenger_transports::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(TransportError::NotFound(id))?;
                let driver = self.validate_references(existing.company_id, &input).await?;

                let mut active: passenger_transports::ActiveModel = existing.into();
                active.driver_id = Set(input.driver_id);
                active.customer_id = Set(input.customer_id);
                active.vehicle_id = Set(input.vehicle_id);
                active.start_address = Set(input.start_address);
                active.end_address = Set(input.end_address);
                active.start_date = Set(input.start_date);
                active.end_date = Set(input.end_date);
                active.price = Set(Some(input.price));
                active.is_paid = Set(is_paid);
                if let TransportDetails::Passenger {
                    number_of_passengers,
                } = input.details
                {
                    active.number_of_passengers = Set(number_of_passengers);
                }
                active.updated_at = Set(now);

                passenger_record(active.update(&self.db).await?, &driver)
            }
        };

        tracing::info!(transport_id = %id, is_paid, "Transport updated");
        Ok(record)
    }

    /// Deletes a transport of one kind.
    ///
    /// Deleting a missing transport is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, kind: TransportKind, id: Uuid) -> Result<(), DbErr> {
        let result = match kind {
            TransportKind::Cargo => cargo_transports::Entity::delete_by_id(id).exec(&self.db).await?,
            TransportKind::Passenger => {
                passenger_transports::Entity::delete_by_id(id)
                    .exec(&self.db)
                    .await?
            }
        };
        if result.rows_affected > 0 {
            tracing::info!(transport_id = %id, %kind, "Transport deleted");
        }
        Ok(())
    }

    /// Checks the references of `input` against the company, then the
    /// vehicle rules. Returns the driver for the response record.
    async fn validate_references(
        &self,
        company_id: Uuid,
        input: &TransportInput,
    ) -> Result<drivers::Model, TransportError> {
        let driver = drivers::Entity::find_by_id(input.driver_id)
            .one(&self.db)
            .await?
            .filter(|d| d.company_id == company_id)
            .ok_or(TransportError::NoSuchDriver)?;

        let customer_linked =
            company_customers::Entity::find_by_id((company_id, input.customer_id))
                .count(&self.db)
                .await?
                > 0;
        if !customer_linked {
            return Err(TransportError::NoSuchCustomer);
        }

        let vehicle = vehicles::Entity::find_by_id(input.vehicle_id)
            .one(&self.db)
            .await?
            .filter(|v| v.company_id == company_id)
            .ok_or(TransportError::NoSuchVehicle)?;

        check_assignment(
            &input.details,
            &vehicle.spec(),
            input.start_date,
            input.end_date,
        )?;

        Ok(driver)
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), TransportError> {
        let count = companies::Entity::find_by_id(company_id)
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(TransportError::CompanyNotFound(company_id));
        }
        Ok(())
    }
}
