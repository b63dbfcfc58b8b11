//! Vehicle assignment rules for transports.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::{TransportDetails, TransportKind, VehicleSpec};

/// Violations of the transport assignment rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportRuleError {
    /// A cargo transport was assigned a vehicle that is not a truck.
    #[error("cargo transport can be done only by truck")]
    CargoRequiresTruck,

    /// A passenger transport was assigned a vehicle that is not a bus.
    #[error("passenger transport can be done only by bus")]
    PassengersRequireBus,

    /// Cargo is heavier than the truck can carry.
    #[error("cargo weight exceeds vehicle capacity")]
    CargoOverweight {
        /// Cargo weight.
        weight: i32,
        /// Truck capacity.
        capacity: i32,
    },

    /// More passengers than seats.
    #[error("vehicle capacity is not enough to carry all passengers")]
    PassengersOverCapacity {
        /// Number of passengers.
        passengers: i32,
        /// Bus capacity.
        capacity: i32,
    },

    /// The transport ends before it starts.
    #[error("start date cannot be after end date")]
    StartAfterEnd {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

/// Checks that `vehicle` may perform a transport with `details` between
/// `start` and `end`.
///
/// Rules are checked in order: vehicle kind, capacity, date order. The first
/// violation is returned.
pub fn check_assignment(
    details: &TransportDetails,
    vehicle: &VehicleSpec,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), TransportRuleError> {
    let kind = details.kind();
    if vehicle.kind != kind.required_vehicle() {
        return Err(match kind {
            TransportKind::Cargo => TransportRuleError::CargoRequiresTruck,
            TransportKind::Passenger => TransportRuleError::PassengersRequireBus,
        });
    }

    let load = details.load();
    if load > vehicle.capacity {
        return Err(match kind {
            TransportKind::Cargo => TransportRuleError::CargoOverweight {
                weight: load,
                capacity: vehicle.capacity,
            },
            TransportKind::Passenger => TransportRuleError::PassengersOverCapacity {
                passengers: load,
                capacity: vehicle.capacity,
            },
        });
    }

    if start > end {
        return Err(TransportRuleError::StartAfterEnd { start, end });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::VehicleKind;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cargo(weight: i32) -> TransportDetails {
        TransportDetails::Cargo {
            cargo_type: "timber".to_string(),
            cargo_weight: weight,
        }
    }

    fn passengers(count: i32) -> TransportDetails {
        TransportDetails::Passenger {
            number_of_passengers: count,
        }
    }

    const TRUCK: VehicleSpec = VehicleSpec {
        kind: VehicleKind::Truck,
        capacity: 1000,
    };

    const BUS: VehicleSpec = VehicleSpec {
        kind: VehicleKind::Bus,
        capacity: 40,
    };

    #[rstest]
    #[case(cargo(1000), TRUCK)]
    #[case(cargo(1), TRUCK)]
    #[case(passengers(40), BUS)]
    #[case(passengers(1), BUS)]
    fn test_valid_assignments(#[case] details: TransportDetails, #[case] vehicle: VehicleSpec) {
        let day = date(2024, 5, 1);
        assert_eq!(check_assignment(&details, &vehicle, day, day), Ok(()));
    }

    #[test]
    fn test_cargo_requires_truck() {
        let result = check_assignment(&cargo(10), &BUS, date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(result, Err(TransportRuleError::CargoRequiresTruck));
    }

    #[test]
    fn test_passengers_require_bus() {
        let result = check_assignment(&passengers(10), &TRUCK, date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(result, Err(TransportRuleError::PassengersRequireBus));
    }

    #[test]
    fn test_cargo_over_capacity() {
        let result = check_assignment(&cargo(1001), &TRUCK, date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(
            result,
            Err(TransportRuleError::CargoOverweight {
                weight: 1001,
                capacity: 1000
            })
        );
    }

    #[test]
    fn test_passengers_over_capacity() {
        let result = check_assignment(&passengers(41), &BUS, date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(
            result.unwrap_err().to_string(),
            "vehicle capacity is not enough to carry all passengers"
        );
    }

    #[test]
    fn test_start_after_end() {
        let result = check_assignment(&cargo(10), &TRUCK, date(2024, 1, 3), date(2024, 1, 2));
        assert_eq!(
            result.unwrap_err().to_string(),
            "start date cannot be after end date"
        );
    }

    #[test]
    fn test_vehicle_kind_is_checked_before_capacity_and_dates() {
        let result = check_assignment(&cargo(5000), &BUS, date(2024, 1, 3), date(2024, 1, 2));
        assert_eq!(result, Err(TransportRuleError::CargoRequiresTruck));
    }

    #[test]
    fn test_capacity_is_checked_before_dates() {
        let result = check_assignment(&passengers(99), &BUS, date(2024, 1, 3), date(2024, 1, 2));
        assert!(matches!(
            result,
            Err(TransportRuleError::PassengersOverCapacity { .. })
        ));
    }
}
