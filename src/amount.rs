//! User-entered amount parsing.
//!
//! Amounts arrive as free text from the command line. Only plain
//! non-negative decimals are accepted: ASCII digits with at most one `.`.
//! Signs, exponents, whitespace and thousands separators are rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected amount input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': expected a non-negative decimal like 1.5")]
    Invalid { input: String },
}

/// Whether `text` is acceptable amount input.
///
/// Empty text counts as valid so a form that has not been filled in yet is
/// not flagged; [`parse_amount`] still refuses it.
#[must_use]
pub fn amount_is_valid(text: &str) -> bool {
    text.is_empty() || is_plain_decimal(text)
}

/// Parse `text` into a non-negative decimal.
///
/// Accepts leading or trailing points (`.22`, `1.`).
pub fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    if text.is_empty() {
        return Err(AmountError::Empty);
    }
    let invalid = || AmountError::Invalid {
        input: text.to_string(),
    };
    if !is_plain_decimal(text) {
        return Err(invalid());
    }

    let normalized = match (text.starts_with('.'), text.ends_with('.')) {
        (true, _) => format!("0{text}"),
        (false, true) => text.trim_end_matches('.').to_string(),
        (false, false) => text.to_string(),
    };
    Decimal::from_str(&normalized).map_err(|_| invalid())
}

fn is_plain_decimal(text: &str) -> bool {
    let mut points = 0;
    let mut digits = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    points <= 1 && digits > 0
}
