//! `SeaORM` entity definitions.

pub mod prelude;

pub mod cargo_transports;
pub mod companies;
pub mod company_customers;
pub mod customers;
pub mod driver_qualifications;
pub mod drivers;
pub mod passenger_transports;
pub mod qualifications;
pub mod sea_orm_active_enums;
pub mod vehicles;
