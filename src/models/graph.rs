use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::coerce_decimal;

// ---------------------------------------------------------------------------
// RawGraphPoint — Backend time bucket, every known field alias kept raw
// ---------------------------------------------------------------------------

/// A pre-aggregated time bucket as the backend sends it.
///
/// Field names vary between endpoints, so every alias is captured and the
/// precedence is resolved once by [`process_graph_data`](crate::analysis::process_graph_data):
/// `date` before `_id.date`, `sales` before `revenue`, `itemCount` before `count`.
/// A preferred alias that is missing, empty, or zero falls through to the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGraphPoint {
    pub date: Value,
    #[serde(rename = "_id")]
    pub group_id: Value,
    pub sales: Value,
    pub revenue: Value,
    pub profit: Value,
    #[serde(rename = "itemCount")]
    pub item_count: Value,
    pub count: Value,
}

impl RawGraphPoint {
    /// The bucket date, preferring the flat `date` field over `_id.date`.
    pub fn resolved_date(&self) -> Option<&str> {
        self.date
            .as_str()
            .filter(|d| !d.is_empty())
            .or_else(|| self.group_id.get("date").and_then(Value::as_str))
    }

    /// The revenue field, preferring `sales` over `revenue`.
    pub fn resolved_revenue(&self) -> &Value {
        first_present(&self.sales, &self.revenue)
    }

    /// The item count field, preferring `itemCount` over `count`.
    pub fn resolved_item_count(&self) -> &Value {
        first_present(&self.item_count, &self.count)
    }
}

// Zero, empty and unparsable values count as absent.
fn first_present<'a>(preferred: &'a Value, fallback: &'a Value) -> &'a Value {
    if coerce_decimal(preferred).is_zero() {
        fallback
    } else {
        preferred
    }
}

// ---------------------------------------------------------------------------
// GraphDataPoint — Normalized time bucket ready for charting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDataPoint {
    pub date: String,
    pub revenue: f64,
    pub profit: f64,
    pub items_sold: f64,
    pub average_margin: f64,
}
