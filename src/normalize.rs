//! Canonicalization of matched textual fragments.
//!
//! Statement text carries dates as `dd.mm.yyyy`, and money as digit groups
//! separated by spaces with a comma before the two decimal digits
//! (e.g. `+1 234,56`). Canonical forms drop grouping, use `.` as the decimal
//! separator, and record positive amounts unsigned.

use crate::error::{ExtractError, Result};
use chrono::NaiveDate;

/// Date format used throughout the statement.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `dd.mm.yyyy` date and re-renders it canonically.
///
/// Doubles as validation: a structurally date-shaped string that is not a
/// real calendar date (e.g. `31.02.2024`) fails the whole parse.
pub fn normalize_date(raw: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        ExtractError::InvalidDate {
            date: raw.to_string(),
        }
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Normalizes a signed amount to canonical decimal text.
///
/// An explicit `+` is dropped and the amount recorded unsigned. Anything
/// else is recorded negative: a leading `-` is stripped and a single `-`
/// re-prefixed, so an amount with no explicit sign also comes out negative
/// (matching how statement debits are printed without a sign).
pub fn normalize_amount(raw: &str) -> String {
    let raw = raw.trim();
    match raw.strip_prefix('+') {
        Some(rest) => canonical_digits(rest),
        None => {
            let rest = raw.strip_prefix('-').unwrap_or(raw);
            format!("-{}", canonical_digits(rest))
        }
    }
}

/// Normalizes a balance to canonical decimal text; balances carry no sign.
pub fn normalize_balance(raw: &str) -> String {
    canonical_digits(raw)
}

/// Strips interior whitespace (digit grouping) and replaces the decimal
/// comma with a point.
fn canonical_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}
