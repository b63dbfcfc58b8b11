//! `SeaORM` Entity for qualifications table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "qualifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub kind: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::driver_qualifications::Entity")]
    DriverQualifications,
}

impl Related<super::driver_qualifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverQualifications.def()
    }
}

impl Related<super::drivers::Entity> for Entity {
    fn to() -> RelationDef {
        super::driver_qualifications::Relation::Drivers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::driver_qualifications::Relation::Qualifications.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
