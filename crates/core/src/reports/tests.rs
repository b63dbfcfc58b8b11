//! Property and scenario tests for the report aggregator.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use transco_shared::types::{CompanyId, CustomerId, DriverId, TransportId, VehicleId};
use uuid::Uuid;

use super::service::ReportService;
use super::types::TransportReference;
use crate::transport::{DriverRef, TransportDetails, TransportKind, TransportRecord};

fn company() -> CompanyId {
    CompanyId::from_uuid(Uuid::from_u128(1))
}

fn driver(n: u8) -> DriverRef {
    DriverRef {
        id: DriverId::from_uuid(Uuid::from_u128(1000 + u128::from(n))),
        name: format!("Driver {n}"),
    }
}

fn record(
    id: u128,
    kind: TransportKind,
    price: Option<Decimal>,
    is_paid: bool,
    driver: DriverRef,
) -> TransportRecord {
    let details = match kind {
        TransportKind::Cargo => TransportDetails::Cargo {
            cargo_type: "gravel".to_string(),
            cargo_weight: 500,
        },
        TransportKind::Passenger => TransportDetails::Passenger {
            number_of_passengers: 12,
        },
    };
    TransportRecord {
        id: TransportId::from_uuid(Uuid::from_u128(id)),
        company_id: company(),
        start_address: "Depot".to_string(),
        end_address: "Harbour".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        price,
        is_paid,
        driver,
        customer_id: CustomerId::from_uuid(Uuid::from_u128(7)),
        vehicle_id: VehicleId::from_uuid(Uuid::from_u128(8)),
        details,
    }
}

fn tid(id: u128) -> TransportId {
    TransportId::from_uuid(Uuid::from_u128(id))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_inputs_give_empty_report() {
    let report = ReportService::aggregate(company(), &[], &[]);

    assert_eq!(report.total_finished_cargo_transports, 0);
    assert_eq!(report.total_finished_passenger_transports, 0);
    assert_eq!(report.total_revenue, Decimal::ZERO);
    assert_eq!(report.total_revenue.to_string(), "0.00");
    assert!(report.unpaid_transports.is_empty());
    assert!(report.drivers.is_empty());
}

#[test]
fn test_one_driver_paid_cargo_unpaid_passenger() {
    let d1 = driver(1);
    let cargo = vec![record(1, TransportKind::Cargo, Some(dec!(100)), true, d1.clone())];
    let passenger = vec![record(2, TransportKind::Passenger, Some(dec!(50)), false, d1.clone())];

    let report = ReportService::aggregate(company(), &cargo, &passenger);

    assert_eq!(report.total_finished_cargo_transports, 1);
    assert_eq!(report.total_finished_passenger_transports, 1);
    assert_eq!(report.total_revenue.to_string(), "100.00");
    assert_eq!(
        report.unpaid_transports,
        vec![TransportReference {
            id: tid(2),
            kind: TransportKind::Passenger
        }]
    );
    assert_eq!(report.drivers.len(), 1);
    assert_eq!(report.drivers[0].id, d1.id);
    assert_eq!(report.drivers[0].name, "Driver 1");
    assert_eq!(report.drivers[0].total_completed_transports, 2);
    assert_eq!(report.drivers[0].generated_revenue.to_string(), "100.00");
}

#[test]
fn test_driver_with_only_unpaid_transports_is_listed_with_zero_revenue() {
    let cargo = vec![
        record(1, TransportKind::Cargo, Some(dec!(250.50)), true, driver(1)),
        record(2, TransportKind::Cargo, Some(dec!(80)), false, driver(2)),
    ];
    let passenger = vec![record(3, TransportKind::Passenger, Some(dec!(30)), false, driver(2))];

    let report = ReportService::aggregate(company(), &cargo, &passenger);

    let unpaid_driver = report
        .drivers
        .iter()
        .find(|d| d.id == driver(2).id)
        .expect("driver 2 should be listed");
    assert_eq!(unpaid_driver.generated_revenue, Decimal::ZERO);
    assert_eq!(unpaid_driver.total_completed_transports, 2);
    assert_eq!(report.total_revenue, dec!(250.50));
}

#[test]
fn test_unpaid_transports_are_cargo_first_in_input_order() {
    let cargo = vec![
        record(10, TransportKind::Cargo, Some(dec!(1)), false, driver(1)),
        record(11, TransportKind::Cargo, Some(dec!(1)), true, driver(1)),
        record(12, TransportKind::Cargo, Some(dec!(1)), false, driver(1)),
    ];
    let passenger = vec![
        record(20, TransportKind::Passenger, Some(dec!(1)), false, driver(1)),
        record(21, TransportKind::Passenger, Some(dec!(1)), false, driver(1)),
    ];

    let report = ReportService::aggregate(company(), &cargo, &passenger);
    let ids: Vec<TransportId> = report.unpaid_transports.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![tid(10), tid(12), tid(20), tid(21)]);
}

#[test]
fn test_missing_price_counts_as_zero() {
    let cargo = vec![
        record(1, TransportKind::Cargo, None, true, driver(1)),
        record(2, TransportKind::Cargo, Some(dec!(40.25)), true, driver(1)),
    ];

    let report = ReportService::aggregate(company(), &cargo, &[]);

    assert_eq!(report.total_revenue, dec!(40.25));
    assert_eq!(report.drivers[0].generated_revenue, dec!(40.25));
    assert_eq!(report.drivers[0].total_completed_transports, 2);
}

#[test]
fn test_first_occurrence_wins_for_driver_name() {
    let renamed = DriverRef {
        id: driver(1).id,
        name: "Renamed".to_string(),
    };
    let cargo = vec![record(1, TransportKind::Cargo, Some(dec!(5)), true, driver(1))];
    let passenger = vec![record(2, TransportKind::Passenger, Some(dec!(5)), true, renamed)];

    let report = ReportService::aggregate(company(), &cargo, &passenger);

    assert_eq!(report.drivers.len(), 1);
    assert_eq!(report.drivers[0].name, "Driver 1");
    assert_eq!(report.drivers[0].generated_revenue, dec!(10));
}

#[test]
fn test_drivers_are_listed_in_first_appearance_order() {
    let cargo = vec![record(1, TransportKind::Cargo, Some(dec!(5)), true, driver(3))];
    let passenger = vec![
        record(2, TransportKind::Passenger, Some(dec!(5)), true, driver(1)),
        record(3, TransportKind::Passenger, Some(dec!(5)), true, driver(3)),
    ];

    let report = ReportService::aggregate(company(), &cargo, &passenger);
    let ids: Vec<DriverId> = report.drivers.iter().map(|d| d.id).collect();

    assert_eq!(ids, vec![driver(3).id, driver(1).id]);
}

#[test]
fn test_report_serializes_with_camel_case_fields() {
    let cargo = vec![record(1, TransportKind::Cargo, Some(dec!(100)), true, driver(1))];
    let passenger = vec![record(2, TransportKind::Passenger, Some(dec!(50)), false, driver(1))];

    let report = ReportService::aggregate(company(), &cargo, &passenger);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["totalFinishedCargoTransports"], 1);
    assert_eq!(json["totalFinishedPassengerTransports"], 1);
    assert_eq!(json["totalRevenue"], "100.00");
    assert_eq!(json["unpaidTransports"][0]["kind"], "passenger");
    assert_eq!(json["drivers"][0]["totalCompletedTransports"], 2);
    assert_eq!(json["drivers"][0]["generatedRevenue"], "100.00");
    assert!(json.get("companyId").is_none());
}

// ============================================================================
// Properties
// ============================================================================

/// Generated record: (driver number, price in cents, has price, paid).
type RawRecord = (u8, i64, bool, bool);

fn raw_records() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec((0u8..4, 0i64..10_000_000, prop::bool::weighted(0.9), any::<bool>()), 0..25)
}

fn build(raw: &[RawRecord], kind: TransportKind, id_base: u128) -> Vec<TransportRecord> {
    raw.iter()
        .enumerate()
        .map(|(i, &(d, cents, has_price, paid))| {
            let price = has_price.then(|| Decimal::new(cents, 2));
            record(id_base + i as u128, kind, price, paid, driver(d))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Transport counts equal the input lengths.
    #[test]
    fn prop_counts_match_input_lengths(cargo in raw_records(), passenger in raw_records()) {
        let cargo = build(&cargo, TransportKind::Cargo, 0);
        let passenger = build(&passenger, TransportKind::Passenger, 1_000);

        let report = ReportService::aggregate(company(), &cargo, &passenger);

        prop_assert_eq!(report.total_finished_cargo_transports, cargo.len() as u64);
        prop_assert_eq!(report.total_finished_passenger_transports, passenger.len() as u64);
    }

    /// Total revenue is the exact sum over paid records and ignores input order.
    #[test]
    fn prop_revenue_is_order_independent(cargo in raw_records(), passenger in raw_records()) {
        let cargo = build(&cargo, TransportKind::Cargo, 0);
        let passenger = build(&passenger, TransportKind::Passenger, 1_000);

        let expected: Decimal = cargo
            .iter()
            .chain(&passenger)
            .filter(|r| r.is_paid)
            .map(TransportRecord::price_or_zero)
            .sum();

        let report = ReportService::aggregate(company(), &cargo, &passenger);
        prop_assert_eq!(report.total_revenue, expected);

        let mut reversed_cargo = cargo.clone();
        reversed_cargo.reverse();
        let mut reversed_passenger = passenger.clone();
        reversed_passenger.reverse();
        let reordered = ReportService::aggregate(company(), &reversed_passenger, &reversed_cargo);
        prop_assert_eq!(reordered.total_revenue, report.total_revenue);
    }

    /// Every unpaid record appears exactly once with its kind; paid records never do.
    #[test]
    fn prop_unpaid_transports_are_complete(cargo in raw_records(), passenger in raw_records()) {
        let cargo = build(&cargo, TransportKind::Cargo, 0);
        let passenger = build(&passenger, TransportKind::Passenger, 1_000);

        let report = ReportService::aggregate(company(), &cargo, &passenger);

        for r in cargo.iter().chain(&passenger) {
            let hits: Vec<&TransportReference> =
                report.unpaid_transports.iter().filter(|u| u.id == r.id).collect();
            if r.is_paid {
                prop_assert!(hits.is_empty());
            } else {
                prop_assert_eq!(hits.len(), 1);
                prop_assert_eq!(hits[0].kind, r.kind());
            }
        }
    }

    /// Each listed driver's count and revenue match their records.
    #[test]
    fn prop_driver_summaries_match_records(cargo in raw_records(), passenger in raw_records()) {
        let cargo = build(&cargo, TransportKind::Cargo, 0);
        let passenger = build(&passenger, TransportKind::Passenger, 1_000);

        let report = ReportService::aggregate(company(), &cargo, &passenger);

        let mut distinct: Vec<DriverId> = cargo.iter().chain(&passenger).map(|r| r.driver.id).collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(report.drivers.len(), distinct.len());

        for summary in &report.drivers {
            let own: Vec<&TransportRecord> = cargo
                .iter()
                .chain(&passenger)
                .filter(|r| r.driver.id == summary.id)
                .collect();
            let revenue: Decimal = own.iter().map(|r| r.realized_revenue()).sum();
            prop_assert_eq!(summary.total_completed_transports, own.len() as u64);
            prop_assert_eq!(summary.generated_revenue, revenue);
        }
    }

    /// Aggregating twice gives the same report and leaves the inputs untouched.
    #[test]
    fn prop_aggregation_is_idempotent(cargo in raw_records(), passenger in raw_records()) {
        let cargo = build(&cargo, TransportKind::Cargo, 0);
        let passenger = build(&passenger, TransportKind::Passenger, 1_000);
        let cargo_before = cargo.clone();
        let passenger_before = passenger.clone();

        let first = ReportService::aggregate(company(), &cargo, &passenger);
        let second = ReportService::aggregate(company(), &cargo, &passenger);

        prop_assert_eq!(first, second);
        prop_assert_eq!(cargo, cargo_before);
        prop_assert_eq!(passenger, passenger_before);
    }
}
