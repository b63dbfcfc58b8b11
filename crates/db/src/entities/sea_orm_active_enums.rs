//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use transco_core::transport::VehicleKind;

/// Postgres `vehicle_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "vehicle_type")]
pub enum VehicleType {
    /// Passenger bus.
    #[sea_orm(string_value = "BUS")]
    Bus,
    /// Cargo truck.
    #[sea_orm(string_value = "TRUCK")]
    Truck,
}

impl From<VehicleKind> for VehicleType {
    fn from(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Bus => Self::Bus,
            VehicleKind::Truck => Self::Truck,
        }
    }
}

impl From<VehicleType> for VehicleKind {
    fn from(value: VehicleType) -> Self {
        match value {
            VehicleType::Bus => Self::Bus,
            VehicleType::Truck => Self::Truck,
        }
    }
}
