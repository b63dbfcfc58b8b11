//! Transport domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use transco_shared::types::{CompanyId, CustomerId, DriverId, TransportId, VehicleId};

/// The two kinds of transport a company performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Goods carried by truck.
    Cargo,
    /// People carried by bus.
    Passenger,
}

impl TransportKind {
    /// Returns the wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Passenger => "passenger",
        }
    }

    /// Returns the vehicle kind able to perform this transport.
    #[must_use]
    pub const fn required_vehicle(self) -> VehicleKind {
        match self {
            Self::Cargo => VehicleKind::Truck,
            Self::Passenger => VehicleKind::Bus,
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle kinds in a company fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleKind {
    /// Passenger bus.
    Bus,
    /// Cargo truck.
    Truck,
}

impl VehicleKind {
    /// Returns the wire name (`BUS` / `TRUCK`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bus => "BUS",
            Self::Truck => "TRUCK",
        }
    }
}

impl std::str::FromStr for VehicleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUS" => Ok(Self::Bus),
            "TRUCK" => Ok(Self::Truck),
            other => Err(format!("type: must be one of [BUS, TRUCK], got '{other}'")),
        }
    }
}

/// The parts of a vehicle the assignment rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSpec {
    /// Vehicle kind.
    pub kind: VehicleKind,
    /// Maximum load: kilograms for trucks, seats for buses.
    pub capacity: i32,
}

/// Kind-specific transport payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransportDetails {
    /// Cargo payload.
    Cargo {
        /// Free-form label of the goods.
        cargo_type: String,
        /// Weight of the goods.
        cargo_weight: i32,
    },
    /// Passenger payload.
    Passenger {
        /// Number of passengers carried.
        number_of_passengers: i32,
    },
}

impl TransportDetails {
    /// Returns the kind tag of this payload.
    #[must_use]
    pub const fn kind(&self) -> TransportKind {
        match self {
            Self::Cargo { .. } => TransportKind::Cargo,
            Self::Passenger { .. } => TransportKind::Passenger,
        }
    }

    /// Returns the load the vehicle must carry.
    #[must_use]
    pub const fn load(&self) -> i32 {
        match self {
            Self::Cargo { cargo_weight, .. } => *cargo_weight,
            Self::Passenger {
                number_of_passengers,
            } => *number_of_passengers,
        }
    }
}

/// Driver identity as carried on a transport row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    /// Driver ID.
    pub id: DriverId,
    /// Display name ("first last").
    pub name: String,
}

/// A cargo or passenger transport as read for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRecord {
    /// Transport ID.
    pub id: TransportId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Pick-up address.
    pub start_address: String,
    /// Destination address.
    pub end_address: String,
    /// First day of the transport.
    pub start_date: NaiveDate,
    /// Last day of the transport.
    pub end_date: NaiveDate,
    /// Agreed price. Rows written before prices were mandatory may lack one.
    pub price: Option<Decimal>,
    /// Whether the customer has paid.
    pub is_paid: bool,
    /// Driver performing the transport.
    pub driver: DriverRef,
    /// Customer ordering the transport.
    pub customer_id: CustomerId,
    /// Vehicle used.
    pub vehicle_id: VehicleId,
    /// Kind-specific payload.
    pub details: TransportDetails,
}

impl TransportRecord {
    /// Returns the kind tag of this record.
    #[must_use]
    pub const fn kind(&self) -> TransportKind {
        self.details.kind()
    }

    /// Returns the price, treating a missing price as zero.
    #[must_use]
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// Returns the revenue this record realizes: its price when paid, zero otherwise.
    #[must_use]
    pub fn realized_revenue(&self) -> Decimal {
        if self.is_paid {
            self.price_or_zero()
        } else {
            Decimal::ZERO
        }
    }
}
