//! Separator-tolerant amount parsing.
//!
//! Users type amounts the way they write them on paper: `3'110.79`,
//! `3'110,79`, `1.234,56`, `1,234.56` or `1234,5`. The rules below pick the
//! decimal separator in a fixed priority order; the first rule that matches
//! wins.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::AmountInputError;

/// Removes every character that cannot be part of an amount.
///
/// Digits, whitespace, apostrophes, commas, dots and the minus sign survive.
#[must_use]
pub fn strip_disallowed(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '\'' | ',' | '.' | '-'))
        .collect()
}

/// Normalizes a pre-filtered amount string into a decimal value.
///
/// Negative values are returned as-is; rejecting them is the caller's job
/// (see [`parse_amount_input`]).
///
/// # Errors
///
/// Returns `AmountInputError::NotANumber` when the cleaned string is empty,
/// contains no digits, or is otherwise not a plain decimal number.
pub fn normalize_amount(input: &str) -> Result<Decimal, AmountInputError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = apply_separator_rules(&compact);
    parse_plain_decimal(&cleaned)
}

/// Parses a raw edited cell value into a non-negative amount.
///
/// # Errors
///
/// Returns `AmountInputError::NotANumber` if the text cannot be interpreted
/// and `AmountInputError::Negative` if it parses below zero.
pub fn parse_amount_input(raw: &str) -> Result<Decimal, AmountInputError> {
    let value = normalize_amount(&strip_disallowed(raw))?;
    if value < Decimal::ZERO {
        return Err(AmountInputError::Negative);
    }
    Ok(value)
}

fn apply_separator_rules(s: &str) -> String {
    let commas = s.matches(',').count();
    let dots = s.matches('.').count();

    if s.contains('\'') {
        // Apostrophes group thousands; a lone remaining comma is the decimal mark.
        let without_groups = s.replace('\'', "");
        if without_groups.matches(',').count() == 1 {
            return without_groups.replace(',', ".");
        }
        return without_groups;
    }

    if commas == 1 && dots == 0 {
        return s.replace(',', ".");
    }

    if commas > 0 && dots == 1 {
        // Rightmost symbol is the decimal mark.
        return if s.rfind(',') > s.rfind('.') {
            s.replace('.', "").replace(',', ".")
        } else {
            s.replace(',', "")
        };
    }

    if dots > 1 {
        if let Some(last_dot) = s.rfind('.') {
            let (head, tail) = s.split_at(last_dot);
            let fraction_len = tail.chars().count() - 1;
            if fraction_len <= 2 {
                return format!("{}{tail}", head.replace('.', ""));
            }
        }
        return s.replace('.', "");
    }

    s.to_string()
}

fn parse_plain_decimal(s: &str) -> Result<Decimal, AmountInputError> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let has_digits = !(int_part.is_empty() && frac_part.is_empty());
    let only_digits = int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit());
    if !has_digits || !only_digits {
        return Err(AmountInputError::NotANumber);
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    Decimal::from_str(&canonical).map_err(|_| AmountInputError::NotANumber)
}
