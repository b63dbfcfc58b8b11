//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod company;
pub mod customer;
pub mod driver;
mod listing;
pub mod qualification;
pub mod report;
pub mod transport;
pub mod vehicle;

pub use company::{CompanyError, CompanyRepository};
pub use customer::{CustomerError, CustomerLink, CustomerRepository, CustomerWithCompanies};
pub use driver::{
    DriverDetails, DriverError, DriverInput, DriverRepository, DriverWithQualifications,
};
pub use qualification::{QualificationError, QualificationRepository};
pub use report::ReportRepository;
pub use transport::{TransportError, TransportFilter, TransportInput, TransportRepository};
pub use vehicle::{VehicleError, VehicleInput, VehicleRepository};

use sea_orm::{DbErr, SqlErr};

/// Returns true if `err` is a foreign key violation, such as deleting a row
/// that other rows still reference.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
