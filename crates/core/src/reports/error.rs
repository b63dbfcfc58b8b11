//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur before a report is aggregated.
///
/// Aggregation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
