//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use chaff_core::periods::PayrollSource as CorePayrollSource;

/// Origin of a payroll entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payroll_source")]
#[serde(rename_all = "lowercase")]
pub enum PayrollSource {
    /// Entered through the payroll form.
    #[sea_orm(string_value = "manual")]
    Manual,
    /// Imported from an external payroll system.
    #[sea_orm(string_value = "import")]
    Import,
}

impl From<PayrollSource> for CorePayrollSource {
    fn from(source: PayrollSource) -> Self {
        match source {
            PayrollSource::Manual => Self::Manual,
            PayrollSource::Import => Self::Import,
        }
    }
}

impl From<CorePayrollSource> for PayrollSource {
    fn from(source: CorePayrollSource) -> Self {
        match source {
            CorePayrollSource::Manual => Self::Manual,
            CorePayrollSource::Import => Self::Import,
        }
    }
}
