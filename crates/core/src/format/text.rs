//! Currency and percentage text.

use rust_decimal::Decimal;

use super::options::DisplayOptions;

/// Shown for empty cells and undefined percentages.
pub const PLACEHOLDER: &str = "—";

/// Formats an amount with thousands grouping and exactly two decimals.
///
/// `1234567.891` with an apostrophe separator renders as `1'234'567.89`.
#[must_use]
pub fn format_currency(value: Decimal, options: &DisplayOptions) -> String {
    let mut rounded = value.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, "00"));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(options.thousands_separator);
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

/// Formats a table cell amount; zero renders as the placeholder.
#[must_use]
pub fn format_amount_cell(value: Decimal, options: &DisplayOptions) -> String {
    if value.is_zero() {
        PLACEHOLDER.to_string()
    } else {
        format_currency(value, options)
    }
}

/// Formats a signed percentage with `precision` decimals.
///
/// Positive values carry a `+`, negative values a `-`, zero carries no sign.
/// `None` renders as the placeholder, never `0%`.
#[must_use]
pub fn format_percent(value: Option<Decimal>, precision: u32) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };

    let mut rounded = value.round_dp(precision);
    rounded.rescale(precision);
    if rounded > Decimal::ZERO {
        format!("+{rounded}%")
    } else if rounded < Decimal::ZERO {
        format!("{rounded}%")
    } else {
        rounded.set_sign_positive(true);
        format!("{rounded}%")
    }
}

/// Formats an unsigned share such as a payroll ratio.
#[must_use]
pub fn format_ratio(value: Option<Decimal>, precision: u32) -> String {
    match value {
        Some(value) => {
            let mut rounded = value.round_dp(precision);
            rounded.rescale(precision);
            format!("{rounded}%")
        }
        None => PLACEHOLDER.to_string(),
    }
}
