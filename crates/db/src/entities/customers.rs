//! `SeaORM` Entity for customers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_customers::Entity")]
    CompanyCustomers,
}

impl Related<super::company_customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyCustomers.def()
    }
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        super::company_customers::Relation::Companies.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::company_customers::Relation::Customers.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
