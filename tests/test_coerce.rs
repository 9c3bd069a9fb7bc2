//! Numeric and date coercion of backend values.

use chrono::{TimeZone, Utc};
use collection_sales_analytics::coerce::{
    coerce_decimal, parse_date, percent_of, round2, sum_money,
};
use collection_sales_analytics::coerce_financial_number;
use rust_decimal::Decimal;
use serde_json::json;

// ---------------------------------------------------------------------------
// coerce_financial_number
// ---------------------------------------------------------------------------

#[test]
fn plain_numbers_pass_through() {
    assert_eq!(coerce_financial_number(&json!(42)), 42.0);
    assert_eq!(coerce_financial_number(&json!(12.34)), 12.34);
    assert_eq!(coerce_financial_number(&json!(-7.5)), -7.5);
}

#[test]
fn numeric_strings_are_parsed() {
    assert_eq!(coerce_financial_number(&json!("12.34")), 12.34);
    assert_eq!(coerce_financial_number(&json!("  99 ")), 99.0);
    assert_eq!(coerce_financial_number(&json!("1.5e3")), 1500.0);
}

#[test]
fn decimal_wrapper_is_unwrapped() {
    assert_eq!(coerce_financial_number(&json!({"$numberDecimal": "12.34"})), 12.34);
    assert_eq!(coerce_financial_number(&json!({"$numberInt": "8"})), 8.0);
    assert_eq!(coerce_financial_number(&json!({"$numberDouble": 2.5})), 2.5);
}

#[test]
fn missing_and_null_become_zero() {
    assert_eq!(coerce_financial_number(&json!(null)), 0.0);
    assert_eq!(coerce_financial_number(&serde_json::Value::Null), 0.0);
}

#[test]
fn garbage_becomes_zero() {
    assert_eq!(coerce_financial_number(&json!("abc")), 0.0);
    assert_eq!(coerce_financial_number(&json!("")), 0.0);
    assert_eq!(coerce_financial_number(&json!("NaN")), 0.0);
    assert_eq!(coerce_financial_number(&json!("Infinity")), 0.0);
    assert_eq!(coerce_financial_number(&json!(true)), 0.0);
    assert_eq!(coerce_financial_number(&json!([1, 2])), 0.0);
    assert_eq!(coerce_financial_number(&json!({"amount": 5})), 0.0);
    assert_eq!(coerce_financial_number(&json!({"$numberDecimal": "oops"})), 0.0);
}

#[test]
fn decimal_coercion_is_exact() {
    assert_eq!(coerce_decimal(&json!(0.01)), Decimal::new(1, 2));
    assert_eq!(coerce_decimal(&json!("0.1")), Decimal::new(1, 1));
}

#[test]
fn decimal_max_parses_exactly() {
    assert_eq!(coerce_decimal(&json!("79228162514264337593543950335")), Decimal::MAX);
    assert_eq!(coerce_decimal(&json!("-79228162514264337593543950335")), Decimal::MIN);
}

#[test]
fn beyond_decimal_range_saturates() {
    assert_eq!(coerce_decimal(&json!("1e30")), Decimal::MAX);
    assert_eq!(coerce_decimal(&json!("-1e30")), Decimal::MIN);
    assert_eq!(coerce_decimal(&json!(1e30)), Decimal::MAX);
    assert_eq!(coerce_decimal(&json!({"$numberDouble": "-1e30"})), Decimal::MIN);
}

#[test]
fn financial_number_keeps_large_finite_values() {
    assert_eq!(coerce_financial_number(&json!(1e30)), 1e30);
    assert_eq!(coerce_financial_number(&json!("-1e30")), -1e30);
    assert_eq!(coerce_financial_number(&json!({"$numberDouble": "1e30"})), 1e30);
    assert_eq!(coerce_financial_number(&json!("1e400")), 0.0);
}

#[test]
fn sum_money_saturates() {
    assert_eq!(sum_money([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
    assert_eq!(sum_money([Decimal::MIN, Decimal::NEGATIVE_ONE]), Decimal::MIN);
    assert_eq!(sum_money([Decimal::MAX, Decimal::ONE, Decimal::MIN]), Decimal::ZERO);
    assert_eq!(sum_money(Vec::<Decimal>::new()), Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Rounding and ratios
// ---------------------------------------------------------------------------

#[test]
fn round2_rounds_half_away_from_zero() {
    assert_eq!(round2(12.486_772), 12.49);
    assert_eq!(round2(2.125), 2.13);
    assert_eq!(round2(-2.125), -2.13);
    assert_eq!(round2(f64::NAN), 0.0);
    assert_eq!(round2(f64::INFINITY), 0.0);
}

#[test]
fn percent_of_guards_non_positive_denominator() {
    assert_eq!(percent_of(Decimal::from(100), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percent_of(Decimal::from(100), Decimal::from(-5)), Decimal::ZERO);
    assert_eq!(percent_of(Decimal::from(25), Decimal::from(100)), Decimal::from(25));
}

// ---------------------------------------------------------------------------
// parse_date
// ---------------------------------------------------------------------------

#[test]
fn parses_rfc3339() {
    assert_eq!(
        parse_date("2024-01-15T10:30:00.000Z"),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
    assert_eq!(
        parse_date("2024-01-15T12:30:00+02:00"),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn parses_naive_timestamps_as_utc() {
    assert_eq!(
        parse_date("2024-01-15T10:30:00"),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
    assert_eq!(
        parse_date("2024-01-15 10:30:00"),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    );
}

#[test]
fn parses_date_only_as_midnight() {
    assert_eq!(
        parse_date("2024-01-15"),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
    );
}

#[test]
fn invalid_dates_are_none() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("not a date"), None);
    assert_eq!(parse_date("2024-13-45"), None);
}
