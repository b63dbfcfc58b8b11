//! `SeaORM` Entity for driver_qualifications join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driver_qualifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub driver_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub qualification_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drivers::Entity",
        from = "Column::DriverId",
        to = "super::drivers::Column::Id",
        on_delete = "Cascade"
    )]
    Drivers,
    #[sea_orm(
        belongs_to = "super::qualifications::Entity",
        from = "Column::QualificationId",
        to = "super::qualifications::Column::Id",
        on_delete = "Cascade"
    )]
    Qualifications,
}

impl Related<super::drivers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drivers.def()
    }
}

impl Related<super::qualifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Qualifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
