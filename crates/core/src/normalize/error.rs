//! Amount input error types.

use thiserror::Error;

/// Message shown to users when an edited amount is rejected.
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid numeric value";

/// Errors raised while turning user-typed text into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountInputError {
    /// The cleaned text is not a number.
    #[error("not a number")]
    NotANumber,

    /// The text parsed to a negative amount.
    #[error("amount cannot be negative")]
    Negative,
}

impl AmountInputError {
    /// Returns the user-visible message for this rejection.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        INVALID_AMOUNT_MESSAGE
    }
}
