//! `SeaORM` entity definitions.

pub mod daily_revenues;
pub mod mandates;
pub mod payroll_entries;
pub mod sea_orm_active_enums;
