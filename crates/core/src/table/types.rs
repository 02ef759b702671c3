//! Table types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::CellTone;

/// One report column, i.e. one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Period label, e.g. `Janvier 2025`.
    pub label: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
}

/// Current-year and prior-year figures for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPair {
    /// Current-year figure.
    pub current: Decimal,
    /// Prior-year figure.
    pub previous: Decimal,
}

/// One day-of-month row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Day of month.
    pub day: u32,
    /// One pair per column, positionally aligned with the columns.
    pub cells: Vec<CellPair>,
}

/// Row/column structure of a period report.
///
/// Every per-period vector is positionally aligned with `columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTable {
    /// Year shown in the "current" sub-columns.
    pub current_year: i32,
    /// Year shown in the "previous" sub-columns.
    pub previous_year: i32,
    /// One column per period.
    pub columns: Vec<TableColumn>,
    /// Union of days present in any period, ascending.
    pub rows: Vec<TableRow>,
    /// Revenue totals.
    pub totals: Vec<CellPair>,
    /// Payroll cost totals.
    pub payroll_totals: Vec<CellPair>,
    /// Payroll-to-revenue ratios in percent.
    pub ratios: Vec<CellPair>,
}

/// A formatted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCell {
    /// Display text.
    pub text: String,
    /// Colour hint.
    pub tone: CellTone,
}

impl RenderedCell {
    pub(crate) fn plain(text: String) -> Self {
        Self {
            text,
            tone: CellTone::Neutral,
        }
    }
}

/// A formatted row: a label followed by a current and a previous cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedRow {
    /// Row header.
    pub label: String,
    /// Two cells per column, current first.
    pub cells: Vec<RenderedCell>,
}

/// Printable text grid of a period report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// Column headers, one per period.
    pub headers: Vec<String>,
    /// Current and previous year headers, repeated per period.
    pub year_headers: Vec<String>,
    /// Day-of-month rows.
    pub day_rows: Vec<RenderedRow>,
    /// Totals, payroll, ratio and growth rows.
    pub summary_rows: Vec<RenderedRow>,
}
