//! Display formatting for report cells.
//!
//! Currency and percentage rendering plus the colour tones the report uses
//! for growth and payroll ratio cells. Everything here is pure and total:
//! missing values degrade to [`PLACEHOLDER`].

pub mod options;
pub mod text;
pub mod tone;

pub use options::{DisplayOptions, RatioThresholds};
pub use text::{PLACEHOLDER, format_amount_cell, format_currency, format_percent, format_ratio};
pub use tone::{CellTone, GrowthTone, RatioTone};
