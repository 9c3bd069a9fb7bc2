//! Lenient coercion of backend JSON values into numbers and timestamps.
//!
//! The sales backend is inconsistent about how it encodes money: plain JSON
//! numbers, numeric strings, and Mongo extended-JSON wrappers such as
//! `{"$numberDecimal": "12.34"}` all show up. Everything here is total:
//! unparsable input becomes zero (numbers) or `None` (dates), never an error.
//!
//! Money arithmetic saturates at `Decimal::MAX` / `Decimal::MIN` (about
//! ±7.9e28) instead of overflowing.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use tracing::debug;

/// Extended-JSON keys that wrap a numeric payload. Finite values outside the
/// `Decimal` range saturate to `Decimal::MAX` / `Decimal::MIN`.
const NUMERIC_WRAPPERS: [&str; 4] = ["$numberDecimal", "$numberDouble", "$numberInt", "$numberLong"];

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Coerce a raw JSON value into an exact decimal.
///
/// Accepts `null`, numbers, numeric strings (plain or scientific notation)
/// and extended-JSON numeric wrappers. Any other shape, and any string that
/// does not parse to a finite number, yields `0`.
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        Value::Object(map) => NUMERIC_WRAPPERS
            .iter()
            .find_map(|key| map.get(*key))
            .map(coerce_decimal)
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Coerce a raw JSON value into a finite `f64`, using the same rules as
/// [`coerce_decimal`] except that values beyond the `Decimal` range are
/// returned as-is rather than saturated.
pub fn coerce_financial_number(value: &Value) -> f64 {
    let decimal = coerce_decimal(value);
    if decimal == Decimal::MAX || decimal == Decimal::MIN {
        if let Some(f) = finite_f64(value) {
            return f;
        }
    }
    decimal.to_f64().unwrap_or(0.0)
}

fn finite_f64(value: &Value) -> Option<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Object(map) => {
            return NUMERIC_WRAPPERS
                .iter()
                .find_map(|key| map.get(*key))
                .and_then(finite_f64)
        }
        _ => None,
    };
    f.filter(|f| f.is_finite())
}

fn parse_decimal(text: &str) -> Decimal {
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| {
            let f = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
            Some(Decimal::from_f64(f).unwrap_or_else(|| {
                debug!(value = text, "number exceeds decimal range; saturating");
                if f < 0.0 {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            }))
        })
        .unwrap_or(Decimal::ZERO)
}

/// Sum money amounts, saturating instead of overflowing.
pub fn sum_money<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

// ---------------------------------------------------------------------------
// Rounding and ratios
// ---------------------------------------------------------------------------

/// Round a decimal to cents (midpoint away from zero) and hand it out as `f64`.
pub fn round_money(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round an `f64` to two decimal places. Non-finite input yields `0`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    match Decimal::from_f64(value) {
        Some(d) => round_money(d),
        None => value,
    }
}

/// `numerator / denominator * 100`, or zero when `denominator` is not positive.
pub fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Convert an already-coerced `f64` back into a decimal for exact arithmetic.
/// Magnitudes beyond the `Decimal` range saturate.
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value < 0.0 { Decimal::MIN } else { Decimal::MAX })
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Parse a backend date string.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps
/// (read as UTC) and bare `YYYY-MM-DD` dates (UTC midnight). Returns `None`
/// for anything else, which callers treat as an invalid date.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
