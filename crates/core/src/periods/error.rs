//! Period error types.

use thiserror::Error;

use super::month::YearMonth;

/// Errors that can occur while preparing period reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1..=12.
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// Year outside the supported calendar.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Malformed `YYYY-MM` string.
    #[error("Invalid year-month: {0}")]
    InvalidYearMonth(String),

    /// Range start is after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// First month of the range.
        start: YearMonth,
        /// Last month of the range.
        end: YearMonth,
    },

    /// Range spans more months than allowed.
    #[error("Range of {months} months exceeds the maximum of {max}")]
    RangeTooLong {
        /// Requested number of months.
        months: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Payroll amounts cannot be negative.
    #[error("Payroll amounts cannot be negative")]
    NegativePayroll,
}
