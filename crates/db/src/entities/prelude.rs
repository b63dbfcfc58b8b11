//! Entity re-exports.

pub use super::cargo_transports::Entity as CargoTransports;
pub use super::companies::Entity as Companies;
pub use super::company_customers::Entity as CompanyCustomers;
pub use super::customers::Entity as Customers;
pub use super::driver_qualifications::Entity as DriverQualifications;
pub use super::drivers::Entity as Drivers;
pub use super::passenger_transports::Entity as PassengerTransports;
pub use super::qualifications::Entity as Qualifications;
pub use super::vehicles::Entity as Vehicles;
