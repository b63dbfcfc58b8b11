//! Company report generation.
//!
//! This module provides pure business logic for the company report:
//! - Report window resolution (default dates, inverted ranges)
//! - Aggregation of finished transports into revenue, unpaid transports
//!   and per-driver performance

pub mod error;
pub mod service;
pub mod types;
pub mod window;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
pub use window::ReportWindow;
