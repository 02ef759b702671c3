//! `SeaORM` Entity for daily_revenues table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_revenues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mandate_id: Uuid,
    pub revenue_date: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub value: Decimal,
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
