//! Report data types.

use rust_decimal::Decimal;
use serde::Serialize;
use transco_shared::types::{CompanyId, DriverId, TransportId};

use crate::transport::TransportKind;

/// Reference to an unpaid transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportReference {
    /// Transport ID.
    pub id: TransportId,
    /// Transport kind (`cargo` / `passenger`).
    pub kind: TransportKind,
}

/// Per-driver rollup within a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSummary {
    /// Driver ID.
    pub id: DriverId,
    /// Driver display name.
    pub name: String,
    /// Transports of both kinds driven in the window.
    pub total_completed_transports: u64,
    /// Sum of prices of the driver's paid transports.
    pub generated_revenue: Decimal,
}

/// Company report for a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyReport {
    /// Company the report was generated for.
    #[serde(skip_serializing)]
    pub company_id: CompanyId,
    /// Passenger transports finished in the window.
    pub total_finished_passenger_transports: u64,
    /// Cargo transports finished in the window.
    pub total_finished_cargo_transports: u64,
    /// Sum of prices of paid transports.
    pub total_revenue: Decimal,
    /// Unpaid transports, cargo first.
    pub unpaid_transports: Vec<TransportReference>,
    /// Drivers in order of first appearance.
    pub drivers: Vec<DriverSummary>,
}
