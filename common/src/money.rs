//! # Currency amounts
//!
//! Amounts are plain [`Decimal`] values and stay unrounded while they are
//! accumulated. Rounding happens exactly once, when an amount is turned into
//! a display string by [`format_amount`].

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Number of fractional digits shown for any amount.
pub const DISPLAY_SCALE: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount '{input}'")]
    Invalid { input: String },
}

/// Rounds `amount` to two places, half-up.
///
/// Amounts in this crate are never negative, so "away from zero" and
/// "half-up" coincide.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats `amount` as `<symbol><thousands-grouped integer>.<2 digits>`.
///
/// ```
/// use rust_decimal::Decimal;
/// use till_common::money::format_amount;
///
/// assert_eq!(format_amount(Decimal::new(123456789, 3), "₱"), "₱123,456.79");
/// ```
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses an amount as it appears in a price cell.
///
/// Accepts bare numbers (`"1250.5"`) as well as display strings with a
/// leading currency symbol and thousands separators (`"₱1,250.50"`). A minus
/// sign may sit on either side of the symbol. Letters are never skipped.
pub fn parse_amount(text: &str) -> Result<Decimal, MoneyError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::Empty);
    }
    let invalid = || MoneyError::Invalid {
        input: text.to_string(),
    };

    let (mut negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut rest = rest
        .trim_start_matches(|c: char| !(c.is_alphanumeric() || c == '.' || c == '-' || c == '+'))
        .trim_start();
    if let Some(unsigned) = rest.strip_prefix('-') {
        if negative {
            return Err(invalid());
        }
        negative = true;
        rest = unsigned;
    }

    if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    let numeric: String = rest.chars().filter(|c| *c != ',').collect();
    let value = Decimal::from_str(&numeric).map_err(|_| invalid())?;

    Ok(if negative { -value } else { value })
}
