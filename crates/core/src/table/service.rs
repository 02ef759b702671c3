//! Table building.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::periods::{DailyValue, Period};

use super::types::{CellPair, PeriodTable, TableColumn, TableRow};

impl PeriodTable {
    /// Lays out `periods` for display under `display_year`.
    ///
    /// Rows cover the union of days found in any period, current or prior
    /// year; a day missing from a given period shows as zero there. Empty
    /// input yields an empty table.
    #[must_use]
    pub fn build(periods: &[Period], display_year: i32) -> Self {
        let columns = periods
            .iter()
            .map(|period| TableColumn {
                label: period.label.clone(),
                year: period.year,
                month: period.month,
            })
            .collect();

        let current_by_day: Vec<HashMap<u32, Decimal>> = periods
            .iter()
            .map(|period| index_by_day(&period.daily_values))
            .collect();
        let previous_by_day: Vec<HashMap<u32, Decimal>> = periods
            .iter()
            .map(|period| index_by_day(&period.previous_year_daily_values))
            .collect();

        let days: BTreeSet<u32> = periods
            .iter()
            .flat_map(|period| {
                period
                    .daily_values
                    .iter()
                    .chain(&period.previous_year_daily_values)
                    .map(|value| value.day)
            })
            .collect();

        let rows = days
            .into_iter()
            .map(|day| TableRow {
                day,
                cells: current_by_day
                    .iter()
                    .zip(&previous_by_day)
                    .map(|(current, previous)| CellPair {
                        current: current.get(&day).copied().unwrap_or_default(),
                        previous: previous.get(&day).copied().unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        let totals = periods
            .iter()
            .map(|period| CellPair {
                current: period.total_value,
                previous: period.year_over_year.previous_year_revenue,
            })
            .collect();

        let payroll_totals = periods
            .iter()
            .map(|period| CellPair {
                current: period
                    .payroll_data
                    .as_ref()
                    .map_or(Decimal::ZERO, |payroll| payroll.total_cost),
                previous: period
                    .year_over_year
                    .previous_year_payroll
                    .unwrap_or_default(),
            })
            .collect();

        let ratios = periods
            .iter()
            .map(|period| CellPair {
                current: period.payroll_to_revenue_ratio.unwrap_or_default(),
                previous: period.previous_year_payroll_ratio().unwrap_or_default(),
            })
            .collect();

        Self {
            current_year: display_year,
            previous_year: display_year.saturating_sub(1),
            columns,
            rows,
            totals,
            payroll_totals,
            ratios,
        }
    }

    /// Returns true when the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn index_by_day(values: &[DailyValue]) -> HashMap<u32, Decimal> {
    let mut by_day = HashMap::with_capacity(values.len());
    for value in values {
        *by_day.entry(value.day).or_insert(Decimal::ZERO) += value.value;
    }
    by_day
}
