//! `SeaORM` Entity for companies table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::drivers::Entity")]
    Drivers,
    #[sea_orm(has_many = "super::vehicles::Entity")]
    Vehicles,
    #[sea_orm(has_many = "super::company_customers::Entity")]
    CompanyCustomers,
    #[sea_orm(has_many = "super::cargo_transports::Entity")]
    CargoTransports,
    #[sea_orm(has_many = "super::passenger_transports::Entity")]
    PassengerTransports,
}

impl Related<super::drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drivers.def()
    }
}

impl Related<super::vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicles.def()
    }
}

impl Related<super::company_customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyCustomers.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        super::company_customers::Relation::Customers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::company_customers::Relation::Companies.def().rev())
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
