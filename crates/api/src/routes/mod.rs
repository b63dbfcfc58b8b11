//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod companies;
pub mod customers;
pub mod drivers;
pub mod health;
pub mod qualifications;
pub mod reports;
pub mod transports;
pub mod vehicles;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(companies::routes())
        .merge(customers::routes())
        .merge(drivers::routes())
        .merge(qualifications::routes())
        .merge(vehicles::routes())
        .merge(transports::cargo::routes())
        .merge(transports::passenger::routes())
        .merge(reports::routes())
}
