//! Trend analysis over graph points.

mod common;

use collection_sales_analytics::models::{Trend, TrendResult};
use collection_sales_analytics::{calculate_trend_analysis, process_graph_json};
use serde_json::json;

use common::point;

#[test]
fn fewer_than_two_points_is_stable_zero() {
    let stable = TrendResult {
        revenue_growth_rate: 0.0,
        profit_growth_rate: 0.0,
        trend: Trend::Stable,
    };
    assert_eq!(calculate_trend_analysis(&[]), stable);
    assert_eq!(calculate_trend_analysis(&[point("2024-01-01", 1000.0, 100.0)]), stable);
}

#[test]
fn growth_above_threshold_is_up() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 200.0),
        point("2024-01-02", 1050.0, 210.0),
        point("2024-01-03", 1100.0, 220.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 10.0);
    assert_eq!(result.profit_growth_rate, 10.0);
    assert_eq!(result.trend, Trend::Up);
}

#[test]
fn decline_below_threshold_is_down() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 100.0),
        point("2024-01-05", 900.0, 50.0),
    ]);
    assert_eq!(result.revenue_growth_rate, -10.0);
    assert_eq!(result.profit_growth_rate, -50.0);
    assert_eq!(result.trend, Trend::Down);
}

#[test]
fn small_change_is_stable() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 100.0),
        point("2024-01-02", 1030.0, 100.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 3.0);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn profit_growth_does_not_drive_trend() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 100.0),
        point("2024-01-02", 1000.0, 500.0),
    ]);
    assert_eq!(result.profit_growth_rate, 400.0);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn points_are_sorted_by_date_first() {
    let result = calculate_trend_analysis(&[
        point("2024-01-03", 1100.0, 220.0),
        point("2024-01-01", 1000.0, 200.0),
        point("2024-01-02", 5000.0, 900.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 10.0);
    assert_eq!(result.trend, Trend::Up);
}

#[test]
fn intermediate_points_are_ignored() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 100.0),
        point("2024-01-02", 10.0, 1.0),
        point("2024-01-03", 1000.0, 100.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 0.0);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn zero_starting_revenue_has_no_growth() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 0.0, 0.0),
        point("2024-01-02", 1000.0, 100.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 0.0);
    assert_eq!(result.profit_growth_rate, 0.0);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn growth_rates_are_rounded() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 1000.0, 100.0),
        point("2024-01-02", 1234.567, 100.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 23.46);
}

#[test]
fn invalid_dates_sort_last() {
    let result = calculate_trend_analysis(&[
        point("not a date", 2000.0, 100.0),
        point("2024-01-02", 1100.0, 100.0),
        point("2024-01-01", 1000.0, 100.0),
    ]);
    assert_eq!(result.revenue_growth_rate, 100.0);
}

#[test]
fn caller_slice_is_not_mutated_and_result_is_repeatable() {
    let points = process_graph_json(&json!([
        {"date": "2024-01-03", "sales": 1200, "profit": 300},
        {"date": "2024-01-01", "sales": 1000, "profit": 200}
    ]));
    let before = points.clone();

    let first = calculate_trend_analysis(&points);
    let second = calculate_trend_analysis(&points);

    assert_eq!(points, before);
    assert_eq!(first, second);
    assert_eq!(first.revenue_growth_rate, 20.0);
    assert_eq!(first.profit_growth_rate, 50.0);
}

#[test]
fn trend_serializes_lowercase() {
    let value = serde_json::to_value(TrendResult::default()).unwrap();
    assert_eq!(value["trend"], "stable");
    assert_eq!(serde_json::to_value(Trend::Up).unwrap(), "up");
}

#[test]
fn growth_across_decimal_range_saturates() {
    let result = calculate_trend_analysis(&[
        point("2024-01-01", 7e28, 7e28),
        point("2024-01-02", -7e28, -7e28),
    ]);
    assert!(result.revenue_growth_rate < -100.0);
    assert!(result.revenue_growth_rate.is_finite());
    assert_eq!(result.trend, Trend::Down);
}
