//! `SeaORM` Entity for drivers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub salary: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Display name used in reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
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
    #[sea_orm(has_many = "super::driver_qualifications::Entity")]
    DriverQualifications,
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

impl Related<super::driver_qualifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverQualifications.def()
    }
}

impl Related<super::qualifications::Entity> for Entity {
    fn to() -> RelationDef {
        super::driver_qualifications::Relation::Qualifications.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::driver_qualifications::Relation::Drivers.def().rev())
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
