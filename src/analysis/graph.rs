//! Graph data normalization and local daily rollups.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::coerce::{coerce_decimal, parse_date, percent_of, round_money};
use crate::ingest::graph_points_from_json;
use crate::models::{GraphDataPoint, RawGraphPoint, Sale};

/// Normalize backend time buckets into chart points.
///
/// Field aliases are resolved per [`RawGraphPoint`], numbers are coerced
/// leniently, and `average_margin` is `profit / revenue * 100` rounded to
/// cents, or `0` when revenue is not positive. Output order matches input.
pub fn process_graph_data(raw_points: &[RawGraphPoint]) -> Vec<GraphDataPoint> {
    raw_points.iter().map(normalize_point).collect()
}

/// [`process_graph_data`] over an untyped payload. Anything that is not an
/// array of objects (after envelope unwrapping) contributes nothing.
pub fn process_graph_json(payload: &Value) -> Vec<GraphDataPoint> {
    process_graph_data(&graph_points_from_json(payload))
}

fn normalize_point(raw: &RawGraphPoint) -> GraphDataPoint {
    let revenue = coerce_decimal(raw.resolved_revenue());
    let profit = coerce_decimal(&raw.profit);
    let items_sold = coerce_decimal(raw.resolved_item_count());

    GraphDataPoint {
        date: raw.resolved_date().unwrap_or_default().to_string(),
        revenue: to_f64(revenue),
        profit: to_f64(profit),
        items_sold: to_f64(items_sold),
        average_margin: round_money(percent_of(profit, revenue)),
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Bucket sales into one point per UTC calendar day, oldest first.
///
/// Used when the backend has no pre-aggregated graph data for a range.
/// Sales whose `date_sold` cannot be parsed are left out.
pub fn daily_graph_points(sales: &[Sale]) -> Vec<GraphDataPoint> {
    let mut days: BTreeMap<NaiveDate, (Decimal, Decimal, u64)> = BTreeMap::new();

    for sale in sales {
        let Some(at) = parse_date(&sale.date_sold) else {
            debug!(sale_id = %sale.id, date = %sale.date_sold, "skipping sale with unparsable date");
            continue;
        };
        let day = days.entry(at.date_naive()).or_default();
        day.0 = day.0.saturating_add(sale.actual_sold_price);
        day.1 = day.1.saturating_add(sale.profit());
        day.2 += 1;
    }

    days.into_iter()
        .map(|(day, (revenue, profit, count))| GraphDataPoint {
            date: day.format("%Y-%m-%d").to_string(),
            revenue: round_money(revenue),
            profit: round_money(profit),
            items_sold: count as f64,
            average_margin: round_money(percent_of(profit, revenue)),
        })
        .collect()
}
