//! `SeaORM` Entity for mandates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "mandates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub mandate_type: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::daily_revenues::Entity")]
    DailyRevenues,
    #[sea_orm(has_many = "super::payroll_entries::Entity")]
    PayrollEntries,
}

impl Related<super::daily_revenues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyRevenues.def()
    }
}

impl Related<super::payroll_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayrollEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
