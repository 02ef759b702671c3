//! Text rendering of a period table.

use rust_decimal::Decimal;

use crate::format::{
    CellTone, DisplayOptions, GrowthTone, RatioTone, format_amount_cell, format_percent,
    format_ratio,
};
use crate::periods::Period;

use super::types::{CellPair, PeriodTable, RenderedCell, RenderedRow, RenderedTable};

const TOTAL_LABEL: &str = "Total CA";
const PAYROLL_LABEL: &str = "Masse salariale";
const RATIO_LABEL: &str = "Ratio MS/CA";
const GROWTH_LABEL: &str = "Évolution N/N-1";
const CUMULATIVE_GROWTH_LABEL: &str = "Évolution cumulée";

impl PeriodTable {
    /// Formats the table for display.
    ///
    /// `periods` must be the slice the table was built from; growth rows are
    /// read from it. Missing figures render as the placeholder.
    #[must_use]
    pub fn render(&self, periods: &[Period], options: &DisplayOptions) -> RenderedTable {
        let headers = self.columns.iter().map(|c| c.label.clone()).collect();
        let year_headers = self
            .columns
            .iter()
            .flat_map(|_| [self.current_year.to_string(), self.previous_year.to_string()])
            .collect();

        let day_rows = self
            .rows
            .iter()
            .map(|row| amount_row(row.day.to_string(), &row.cells, options))
            .collect();

        let summary_rows = vec![
            amount_row(TOTAL_LABEL.to_string(), &self.totals, options),
            amount_row(PAYROLL_LABEL.to_string(), &self.payroll_totals, options),
            self.ratio_row(options),
            self.growth_row(GROWTH_LABEL, periods, options, |p| {
                p.year_over_year.revenue_growth
            }),
            self.growth_row(CUMULATIVE_GROWTH_LABEL, periods, options, |p| {
                p.cumulative_revenue_growth
            }),
        ];

        RenderedTable {
            headers,
            year_headers,
            day_rows,
            summary_rows,
        }
    }

    fn ratio_row(&self, options: &DisplayOptions) -> RenderedRow {
        let cells = self
            .ratios
            .iter()
            .flat_map(|pair| {
                [pair.current, pair.previous].map(|value| {
                    let ratio = non_zero(value);
                    RenderedCell {
                        text: format_ratio(ratio, options.percent_precision),
                        tone: RatioTone::classify(ratio, &options.ratio_thresholds).into(),
                    }
                })
            })
            .collect();

        RenderedRow {
            label: RATIO_LABEL.to_string(),
            cells,
        }
    }

    fn growth_row(
        &self,
        label: &str,
        periods: &[Period],
        options: &DisplayOptions,
        growth: impl Fn(&Period) -> Option<Decimal>,
    ) -> RenderedRow {
        let cells = (0..self.columns.len())
            .flat_map(|i| {
                let value = periods.get(i).and_then(&growth);
                [
                    RenderedCell {
                        text: format_percent(value, options.percent_precision),
                        tone: GrowthTone::from_growth(value).into(),
                    },
                    RenderedCell {
                        text: String::new(),
                        tone: CellTone::Neutral,
                    },
                ]
            })
            .collect();

        RenderedRow {
            label: label.to_string(),
            cells,
        }
    }
}

fn amount_row(label: String, pairs: &[CellPair], options: &DisplayOptions) -> RenderedRow {
    let cells = pairs
        .iter()
        .flat_map(|pair| {
            [
                RenderedCell::plain(format_amount_cell(pair.current, options)),
                RenderedCell::plain(format_amount_cell(pair.previous, options)),
            ]
        })
        .collect();

    RenderedRow { label, cells }
}

fn non_zero(value: Decimal) -> Option<Decimal> {
    (!value.is_zero()).then_some(value)
}
