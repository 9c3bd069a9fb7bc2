//! Turning untyped backend payloads into typed records.
//!
//! Payloads may be a bare array or an `{"data": [...]}` envelope. Anything
//! else yields an empty list; array elements that are not objects are
//! skipped.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{RawGraphPoint, Sale};

/// Strip a `{"data": ...}` response envelope, if present.
pub fn unwrap_envelope(payload: &Value) -> &Value {
    match payload {
        Value::Object(map) => map.get("data").unwrap_or(payload),
        _ => payload,
    }
}

/// Read sales from a backend payload.
pub fn sales_from_json(payload: &Value) -> Vec<Sale> {
    records(payload, "sale")
}

/// Read raw graph buckets from a backend payload.
pub fn graph_points_from_json(payload: &Value) -> Vec<RawGraphPoint> {
    records(payload, "graph point")
}

fn records<T: DeserializeOwned>(payload: &Value, kind: &str) -> Vec<T> {
    let Some(items) = unwrap_envelope(payload).as_array() else {
        if !payload.is_null() {
            debug!(kind, "payload is not an array; treating as empty");
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                debug!(kind, index, "skipping non-object element");
                return None;
            }
            match T::deserialize(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(kind, index, error = %e, "skipping malformed element");
                    None
                }
            }
        })
        .collect()
}
