//! `SeaORM` Entity for vehicles table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use transco_core::transport::VehicleSpec;

use super::sea_orm_active_enums::VehicleType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub registration: String,
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// The parts of the vehicle the transport rules look at.
    pub fn spec(&self) -> VehicleSpec {
        VehicleSpec {
            kind: self.vehicle_type.into(),
            capacity: self.capacity,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id",
        on_delete = "Cascade"
    )]
    Companies,
    #[sea_orm(has_many = "super::cargo_transports::Entity")]
    CargoTransports,
    #[sea_orm(has_many = "super::passenger_transports::Entity")]
    PassengerTransports,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::cargo_transports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CargoTransports.def()
    }
}

impl Related<super::passenger_transports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PassengerTransports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
