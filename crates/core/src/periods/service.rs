//! Period aggregation service.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use chaff_shared::types::MandateId;

use super::error::PeriodError;
use super::month::{MonthRange, YearMonth};
use super::types::{
    DailyValue, DayValue, PayrollEntry, PayrollSource, PayrollTotals, Period, YearOverYear,
};

/// Growth of `current` over `previous` in percent, rounded to 2 places.
///
/// `None` when `previous` is zero.
#[must_use]
pub fn growth_percent(current: Decimal, previous: Decimal) -> Option<Decimal> {
    (current - previous)
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp(2))
}

/// `numerator / denominator × 100`, rounded to 2 places.
///
/// `None` when `denominator` is zero.
#[must_use]
pub fn ratio_percent(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp(2))
}

/// Service for building period aggregates.
pub struct PeriodService;

impl PeriodService {
    /// Builds one period per month of `range`.
    ///
    /// `day_values` and `payroll_entries` must cover both the range and the
    /// same range one year earlier; anything outside is ignored. Values of
    /// different mandates are consolidated by summing, which serves the
    /// per-mandate, global and per-type views alike.
    #[must_use]
    pub fn build_periods(
        range: &MonthRange,
        day_values: &[DayValue],
        payroll_entries: &[PayrollEntry],
    ) -> Vec<Period> {
        let revenue_by_date = Self::consolidate_revenue(day_values);
        let payroll_by_month = Self::consolidate_payroll(payroll_entries);

        let mut cumulative_total = Decimal::ZERO;
        let mut cumulative_previous_revenue = Decimal::ZERO;
        let mut cumulative_payroll = Decimal::ZERO;
        let mut cumulative_previous_payroll = Decimal::ZERO;

        range
            .months()
            .into_iter()
            .map(|month| {
                let previous_month = month.previous_year();

                let daily_values = Self::daily_values(&revenue_by_date, month);
                let previous_year_daily_values =
                    Self::daily_values(&revenue_by_date, previous_month);

                let total_value = sum_values(&daily_values);
                let previous_year_revenue = sum_values(&previous_year_daily_values);
                let active_days = count_active_days(&daily_values);
                let average_daily = average(total_value, active_days);
                // Prior-year average uses the prior year's own active-day count.
                let previous_year_average_daily = average(
                    previous_year_revenue,
                    count_active_days(&previous_year_daily_values),
                );

                let payroll_data = payroll_by_month.get(&month).cloned();
                let previous_year_payroll = payroll_by_month
                    .get(&previous_month)
                    .map(|totals| totals.total_cost);
                let payroll_cost = payroll_data
                    .as_ref()
                    .map_or(Decimal::ZERO, |totals| totals.total_cost);

                cumulative_total += total_value;
                cumulative_previous_revenue += previous_year_revenue;
                cumulative_payroll += payroll_cost;
                cumulative_previous_payroll += previous_year_payroll.unwrap_or(Decimal::ZERO);

                let payroll_to_revenue_ratio = payroll_data
                    .as_ref()
                    .and_then(|totals| ratio_percent(totals.total_cost, total_value));
                let payroll_growth = payroll_data.as_ref().and_then(|totals| {
                    previous_year_payroll
                        .and_then(|previous| growth_percent(totals.total_cost, previous))
                });

                Period {
                    year: month.year(),
                    month: month.month(),
                    label: month.label(),
                    daily_values,
                    previous_year_daily_values,
                    total_value,
                    average_daily,
                    days_with_data: active_days,
                    cumulative_total,
                    cumulative_previous_year_revenue: cumulative_previous_revenue,
                    cumulative_revenue_growth: growth_percent(
                        cumulative_total,
                        cumulative_previous_revenue,
                    ),
                    payroll_data,
                    payroll_to_revenue_ratio,
                    cumulative_payroll,
                    cumulative_previous_year_payroll: cumulative_previous_payroll,
                    cumulative_payroll_growth: growth_percent(
                        cumulative_payroll,
                        cumulative_previous_payroll,
                    ),
                    year_over_year: YearOverYear {
                        previous_year_revenue,
                        previous_year_payroll,
                        revenue_growth: growth_percent(total_value, previous_year_revenue),
                        payroll_growth,
                        previous_year_average_daily,
                        average_daily_growth: growth_percent(
                            average_daily,
                            previous_year_average_daily,
                        ),
                    },
                }
            })
            .collect()
    }

    /// Validates a payroll submission before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth`/`InvalidYear` for an impossible
    /// month and `PeriodError::NegativePayroll` for negative amounts.
    pub fn validate_payroll(
        gross_amount: Decimal,
        social_charges: Decimal,
        year: i32,
        month: u32,
    ) -> Result<YearMonth, PeriodError> {
        let period = YearMonth::new(year, month)?;
        if gross_amount < Decimal::ZERO || social_charges < Decimal::ZERO {
            return Err(PeriodError::NegativePayroll);
        }
        Ok(period)
    }

    /// Sums revenue of all mandates per date.
    fn consolidate_revenue(day_values: &[DayValue]) -> BTreeMap<NaiveDate, Decimal> {
        let mut by_date = BTreeMap::new();
        for day_value in day_values {
            *by_date.entry(day_value.date).or_insert(Decimal::ZERO) += day_value.value;
        }
        by_date
    }

    /// Picks one payroll entry per mandate-month, then sums across mandates.
    ///
    /// A manual entry hides an import for the same mandate and month.
    fn consolidate_payroll(entries: &[PayrollEntry]) -> BTreeMap<YearMonth, PayrollTotals> {
        let mut selected: HashMap<(MandateId, YearMonth), &PayrollEntry> = HashMap::new();
        for entry in entries {
            let key = (entry.mandate_id, entry.period);
            match selected.get(&key) {
                Some(existing)
                    if existing.source == PayrollSource::Manual
                        && entry.source == PayrollSource::Import => {}
                _ => {
                    selected.insert(key, entry);
                }
            }
        }

        let mut by_month: BTreeMap<YearMonth, Vec<&PayrollEntry>> = BTreeMap::new();
        for ((_, month), entry) in selected {
            by_month.entry(month).or_default().push(entry);
        }

        by_month
            .into_iter()
            .filter_map(|(month, entries)| {
                PayrollTotals::from_entries(entries).map(|totals| (month, totals))
            })
            .collect()
    }

    fn daily_values(
        revenue_by_date: &BTreeMap<NaiveDate, Decimal>,
        month: YearMonth,
    ) -> Vec<DailyValue> {
        revenue_by_date
            .range(month.first_day()..=month.last_day())
            .map(|(date, value)| DailyValue {
                day: date.day(),
                value: *value,
            })
            .collect()
    }
}

fn sum_values(values: &[DailyValue]) -> Decimal {
    values.iter().map(|v| v.value).sum()
}

fn count_active_days(values: &[DailyValue]) -> u32 {
    u32::try_from(values.iter().filter(|v| v.value > Decimal::ZERO).count()).unwrap_or(u32::MAX)
}

fn average(total: Decimal, days: u32) -> Decimal {
    total
        .checked_div(Decimal::from(days))
        .map_or(Decimal::ZERO, |avg| avg.round_dp(2))
}
