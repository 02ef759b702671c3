//! Monthly period aggregation.
//!
//! Turns raw day values and payroll entries into one [`Period`] per calendar
//! month, with prior-year comparison and running totals over the range.

pub mod error;
pub mod month;
pub mod service;
pub mod types;


pub use error::PeriodError;
pub use month::{MAX_YEAR, MIN_YEAR, MonthRange, YearMonth};
pub use service::{PeriodService, growth_percent, ratio_percent};
pub use types::*;
