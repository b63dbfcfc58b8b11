//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - Error to response mapping
//! - Request validation

pub mod error;
pub mod params;
pub mod routes;
pub mod validation;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Number of items on one list page.
    pub page_size: u32,
}

impl AppState {
    /// Creates application state around a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, page_size: u32) -> Self {
        Self {
            db: Arc::new(db),
            page_size,
        }
    }

    /// Returns a connection handle for a repository.
    #[must_use]
    pub fn conn(&self) -> DatabaseConnection {
        (*self.db).clone()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
