//! Payroll repository for monthly payroll cost entries.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};
use uuid::Uuid;

use chaff_core::periods::{MonthRange, PayrollEntry, PeriodError, PeriodService, YearMonth};
use chaff_shared::types::MandateId;

use crate::entities::{payroll_entries, sea_orm_active_enums::PayrollSource};

/// Error types for payroll operations.
#[derive(Debug, thiserror::Error)]
pub enum PayrollError {
    /// Submitted payroll failed validation.
    #[error("Invalid payroll: {0}")]
    Invalid(#[from] PeriodError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording a mandate's payroll for one month.
#[derive(Debug, Clone)]
pub struct UpsertPayrollInput {
    /// Mandate the payroll belongs to.
    pub mandate_id: Uuid,
    /// Year of the covered month.
    pub year: i32,
    /// Covered month (1-12).
    pub month: u32,
    /// Gross wages.
    pub gross_amount: Decimal,
    /// Employer social charges.
    pub social_charges: Decimal,
    /// Headcount, if known.
    pub employee_count: Option<i32>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Payroll repository.
#[derive(Debug, Clone)]
pub struct PayrollRepository {
    db: DatabaseConnection,
}

impl PayrollRepository {
    /// Creates a new payroll repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the manual payroll entry of a mandate-month.
    ///
    /// Imported entries for the same month are left untouched; reports prefer
    /// the manual one.
    ///
    /// # Errors
    ///
    /// Returns an error if the amounts or month are invalid, or the database fails.
    pub async fn upsert_manual(
        &self,
        input: UpsertPayrollInput,
    ) -> Result<payroll_entries::Model, PayrollError> {
        let period = PeriodService::validate_payroll(
            input.gross_amount,
            input.social_charges,
            input.year,
            input.month,
        )?;
        let year = period.year();
        let month = month_column(period);
        let total_cost = input.gross_amount + input.social_charges;
        let notes = input
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let now = chrono::Utc::now().into();
        let entry = payroll_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            mandate_id: Set(input.mandate_id),
            year: Set(year),
            month: Set(month),
            gross_amount: Set(input.gross_amount),
            social_charges: Set(input.social_charges),
            total_cost: Set(total_cost),
            employee_count: Set(input.employee_count),
            notes: Set(notes),
            source: Set(PayrollSource::Manual),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = payroll_entries::Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    payroll_entries::Column::MandateId,
                    payroll_entries::Column::Year,
                    payroll_entries::Column::Month,
                    payroll_entries::Column::Source,
                ])
                .update_columns([
                    payroll_entries::Column::GrossAmount,
                    payroll_entries::Column::SocialCharges,
                    payroll_entries::Column::TotalCost,
                    payroll_entries::Column::EmployeeCount,
                    payroll_entries::Column::Notes,
                    payroll_entries::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(stored)
    }

    /// Lists every payroll entry of a mandate for one calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_year(
        &self,
        mandate_id: Uuid,
        year: i32,
    ) -> Result<Vec<payroll_entries::Model>, DbErr> {
        payroll_entries::Entity::find()
            .filter(payroll_entries::Column::MandateId.eq(mandate_id))
            .filter(payroll_entries::Column::Year.eq(year))
            .order_by_asc(payroll_entries::Column::Month)
            .order_by_asc(payroll_entries::Column::Source)
            .all(&self.db)
            .await
    }

    /// Lists payroll entries of the given mandates within a month range.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_between(
        &self,
        mandate_ids: &[Uuid],
        range: &MonthRange,
    ) -> Result<Vec<payroll_entries::Model>, DbErr> {
        if mandate_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = payroll_entries::Entity::find()
            .filter(payroll_entries::Column::MandateId.is_in(mandate_ids.iter().copied()))
            .filter(payroll_entries::Column::Year.gte(range.start().year()))
            .filter(payroll_entries::Column::Year.lte(range.end().year()))
            .order_by_asc(payroll_entries::Column::Year)
            .order_by_asc(payroll_entries::Column::Month)
            .all(&self.db)
            .await?;

        Ok(entries
            .into_iter()
            .filter(|entry| model_period(entry).is_ok_and(|period| range.contains(period)))
            .collect())
    }
}

/// Converts a stored row into the domain entry used for aggregation.
///
/// # Errors
///
/// Returns an error if the stored month is out of range.
pub fn to_payroll_entry(model: &payroll_entries::Model) -> Result<PayrollEntry, PeriodError> {
    Ok(PayrollEntry {
        mandate_id: MandateId::from_uuid(model.mandate_id),
        period: model_period(model)?,
        gross_amount: model.gross_amount,
        social_charges: model.social_charges,
        total_cost: model.total_cost,
        employee_count: model.employee_count,
        notes: model.notes.clone(),
        source: model.source.into(),
    })
}

fn model_period(model: &payroll_entries::Model) -> Result<YearMonth, PeriodError> {
    let month = u32::try_from(model.month).map_err(|_| PeriodError::InvalidMonth(0))?;
    YearMonth::new(model.year, month)
}

fn month_column(period: YearMonth) -> i32 {
    i32::try_from(period.month()).unwrap_or(12)
}
