//! Report repository: loads the raw inputs of a period report.

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use chaff_core::periods::{DayValue, MonthRange, PayrollEntry, PeriodError};
use chaff_shared::types::MandateId;

use super::payroll::{PayrollRepository, to_payroll_entry};
use super::revenue::RevenueRepository;

/// Error types for report loading.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A stored row could not be turned into a domain value.
    #[error("Corrupt reporting data: {0}")]
    Corrupt(#[from] PeriodError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Day values and payroll entries for a range and its prior year.
#[derive(Debug, Clone, Default)]
pub struct PeriodInputs {
    /// Revenue per mandate and day.
    pub day_values: Vec<DayValue>,
    /// Payroll entries, manual and imported.
    pub payroll_entries: Vec<PayrollEntry>,
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    revenues: RevenueRepository,
    payroll: PayrollRepository,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            revenues: RevenueRepository::new(db.clone()),
            payroll: PayrollRepository::new(db),
        }
    }

    /// Loads everything needed to build the periods of `range` for `mandate_ids`.
    ///
    /// The prior-year range is included so year-over-year figures can be computed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database fails or holds an invalid payroll month.
    pub async fn load_period_inputs(
        &self,
        mandate_ids: &[Uuid],
        range: &MonthRange,
    ) -> Result<PeriodInputs, ReportError> {
        if mandate_ids.is_empty() {
            return Ok(PeriodInputs::default());
        }

        let covered = MonthRange::new(range.previous_year().start(), range.end())?;
        let (start, end) = covered.date_bounds();

        let day_values = self
            .revenues
            .list_between(mandate_ids, start, end)
            .await?
            .into_iter()
            .map(|row| DayValue {
                mandate_id: MandateId::from_uuid(row.mandate_id),
                date: row.revenue_date,
                value: row.value,
            })
            .collect();

        let payroll_entries = self
            .payroll
            .list_between(mandate_ids, &covered)
            .await?
            .iter()
            .map(to_payroll_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PeriodInputs {
            day_values,
            payroll_entries,
        })
    }
}
