//! `SeaORM` Entity for payroll_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PayrollSource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mandate_id: Uuid,
    pub year: i32,
    pub month: i32,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub gross_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub social_charges: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub total_cost: Decimal,
    pub employee_count: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub source: PayrollSource,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mandates::Entity",
        from = "Column::MandateId",
        to = "super::mandates::Column::Id"
    )]
    Mandates,
}

impl Related<super::mandates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mandates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
