//! Amount normalization for edited cells.
//!
//! This module turns free-form text typed by a user into a decimal amount,
//! tolerating the Swiss and European thousands/decimal separator styles.

pub mod error;
pub mod parser;


pub use error::{AmountInputError, INVALID_AMOUNT_MESSAGE};
pub use parser::{normalize_amount, parse_amount_input, strip_disallowed};
