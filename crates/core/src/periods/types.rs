//! Period data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chaff_shared::types::MandateId;

use super::error::PeriodError;
use super::month::YearMonth;

/// A single day's recorded revenue for one mandate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayValue {
    /// Mandate the revenue belongs to.
    pub mandate_id: MandateId,
    /// Calendar date.
    pub date: NaiveDate,
    /// Recorded amount (non-negative).
    pub value: Decimal,
}

/// Where a payroll entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollSource {
    /// Entered through the payroll form.
    Manual,
    /// Imported from an external payroll system.
    Import,
}

/// One mandate's payroll cost for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Mandate the payroll belongs to.
    pub mandate_id: MandateId,
    /// Month the payroll covers.
    pub period: YearMonth,
    /// Gross wages.
    pub gross_amount: Decimal,
    /// Employer social charges.
    pub social_charges: Decimal,
    /// Gross wages plus social charges.
    pub total_cost: Decimal,
    /// Headcount, if known.
    pub employee_count: Option<i32>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Origin of the entry.
    pub source: PayrollSource,
}

impl PayrollEntry {
    /// Creates a payroll entry, deriving `total_cost`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::NegativePayroll` if either amount is negative.
    pub fn new(
        mandate_id: MandateId,
        period: YearMonth,
        gross_amount: Decimal,
        social_charges: Decimal,
        source: PayrollSource,
    ) -> Result<Self, PeriodError> {
        if gross_amount < Decimal::ZERO || social_charges < Decimal::ZERO {
            return Err(PeriodError::NegativePayroll);
        }
        Ok(Self {
            mandate_id,
            period,
            gross_amount,
            social_charges,
            total_cost: gross_amount + social_charges,
            employee_count: None,
            notes: None,
            source,
        })
    }

    /// Sets the headcount.
    #[must_use]
    pub fn with_employee_count(mut self, employee_count: Option<i32>) -> Self {
        self.employee_count = employee_count;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Revenue recorded for one day of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyValue {
    /// Day of month (1-31).
    pub day: u32,
    /// Amount recorded for that day.
    pub value: Decimal,
}

/// Payroll totals attached to a period, possibly consolidated over mandates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Gross wages.
    pub gross_amount: Decimal,
    /// Employer social charges.
    pub social_charges: Decimal,
    /// Gross wages plus social charges.
    pub total_cost: Decimal,
    /// Total headcount, when every contributing entry reports one and the sum fits.
    pub employee_count: Option<i32>,
}

impl PayrollTotals {
    /// Sums the given entries; `None` when there are none.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a PayrollEntry>) -> Option<Self> {
        let mut entries = entries.into_iter();
        let first = entries.next()?;
        let mut totals = Self {
            gross_amount: first.gross_amount,
            social_charges: first.social_charges,
            total_cost: first.total_cost,
            employee_count: first.employee_count,
        };
        for entry in entries {
            totals.gross_amount += entry.gross_amount;
            totals.social_charges += entry.social_charges;
            totals.total_cost += entry.total_cost;
            totals.employee_count = totals
                .employee_count
                .zip(entry.employee_count)
                .and_then(|(sum, count)| sum.checked_add(count));
        }
        Some(totals)
    }
}

/// Comparison against the same month one year earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOverYear {
    /// Revenue of the prior-year month.
    pub previous_year_revenue: Decimal,
    /// Payroll of the prior-year month, if any was recorded.
    pub previous_year_payroll: Option<Decimal>,
    /// Revenue growth in percent; `None` when prior-year revenue is zero.
    pub revenue_growth: Option<Decimal>,
    /// Payroll growth in percent; `None` without prior-year payroll.
    pub payroll_growth: Option<Decimal>,
    /// Prior-year revenue divided by prior-year days with data.
    pub previous_year_average_daily: Decimal,
    /// Average daily revenue growth in percent.
    pub average_daily_growth: Option<Decimal>,
}

/// One calendar month of aggregated revenue and payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    /// Display label.
    pub label: String,
    /// Current-year values by day of month, ascending.
    pub daily_values: Vec<DailyValue>,
    /// Prior-year values by day of month, ascending.
    pub previous_year_daily_values: Vec<DailyValue>,
    /// Sum of `daily_values`.
    pub total_value: Decimal,
    /// `total_value / days_with_data`, zero without data.
    pub average_daily: Decimal,
    /// Days with a strictly positive value.
    pub days_with_data: u32,
    /// Running revenue total since the first period of the range.
    pub cumulative_total: Decimal,
    /// Running prior-year revenue total since the first period of the range.
    pub cumulative_previous_year_revenue: Decimal,
    /// Cumulative revenue growth in percent.
    pub cumulative_revenue_growth: Option<Decimal>,
    /// Payroll recorded for this month.
    pub payroll_data: Option<PayrollTotals>,
    /// Payroll cost as a percentage of revenue.
    pub payroll_to_revenue_ratio: Option<Decimal>,
    /// Running payroll total since the first period of the range.
    pub cumulative_payroll: Decimal,
    /// Running prior-year payroll total since the first period of the range.
    pub cumulative_previous_year_payroll: Decimal,
    /// Cumulative payroll growth in percent.
    pub cumulative_payroll_growth: Option<Decimal>,
    /// Year-over-year comparison.
    pub year_over_year: YearOverYear,
}

impl Period {
    /// Prior-year payroll as a percentage of prior-year revenue.
    ///
    /// `None` unless both figures are strictly positive.
    #[must_use]
    pub fn previous_year_payroll_ratio(&self) -> Option<Decimal> {
        let payroll = self.year_over_year.previous_year_payroll?;
        let revenue = self.year_over_year.previous_year_revenue;
        if payroll <= Decimal::ZERO || revenue <= Decimal::ZERO {
            return None;
        }
        super::service::ratio_percent(payroll, revenue)
    }
}
