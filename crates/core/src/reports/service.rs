//! Report generation service.

use std::collections::HashMap;

use rust_decimal::Decimal;
use transco_shared::types::{CompanyId, DriverId, money::to_currency_scale};

use super::types::{CompanyReport, DriverSummary, TransportReference};
use crate::transport::TransportRecord;

/// Service for generating company reports.
pub struct ReportService;

impl ReportService {
    /// Aggregates a company's finished transports into a report.
    ///
    /// Both slices must already be restricted to the company and the report
    /// window. Records are visited cargo first, each slice in order, which
    /// fixes the order of `unpaid_transports` and `drivers`. A record without
    /// a price counts as zero.
    #[must_use]
    pub fn aggregate(
        company_id: CompanyId,
        cargo: &[TransportRecord],
        passenger: &[TransportRecord],
    ) -> CompanyReport {
        let mut total_revenue = Decimal::ZERO;
        let mut unpaid_transports = Vec::new();
        let mut drivers: Vec<DriverSummary> = Vec::new();
        let mut driver_slots: HashMap<DriverId, usize> = HashMap::new();

        for record in cargo.iter().chain(passenger) {
            let revenue = record.realized_revenue();
            total_revenue += revenue;

            if !record.is_paid {
                unpaid_transports.push(TransportReference {
                    id: record.id,
                    kind: record.kind(),
                });
            }

            let slot = *driver_slots.entry(record.driver.id).or_insert_with(|| {
                drivers.push(DriverSummary {
                    id: record.driver.id,
                    name: record.driver.name.clone(),
                    total_completed_transports: 0,
                    generated_revenue: Decimal::ZERO,
                });
                drivers.len() - 1
            });
            let summary = &mut drivers[slot];
            summary.total_completed_transports += 1;
            summary.generated_revenue += revenue;
        }

        for summary in &mut drivers {
            summary.generated_revenue = to_currency_scale(summary.generated_revenue);
        }

        CompanyReport {
            company_id,
            total_finished_passenger_transports: passenger.len() as u64,
            total_finished_cargo_transports: cargo.len() as u64,
            total_revenue: to_currency_scale(total_revenue),
            unpaid_transports,
            drivers,
        }
    }
}
