//! Date-range filtering.
//!
//! A record is kept unless its date is strictly before the start bound or
//! strictly after the end bound. Unparsable dates never raise: a record with
//! an invalid date is kept, and an invalid bound leaves that side open.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::parse_date;
use crate::config;
use crate::models::Sale;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// An optional start/end pair of backend date strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    /// A range with neither bound set.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        }
    }

    pub fn between(start_date: &str, end_date: &str) -> Self {
        Self::new(Some(start_date), Some(end_date))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether a record dated `date` falls inside the range.
    pub fn contains(&self, date: &str) -> bool {
        Bounds::parse(self.start_date.as_deref(), self.end_date.as_deref()).admits(date)
    }

    /// Query parameters for the backend, omitting unset bounds.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = &self.start_date {
            params.push((config::START_DATE_PARAM, start.clone()));
        }
        if let Some(end) = &self.end_date {
            params.push((config::END_DATE_PARAM, end.clone()));
        }
        params
    }
}

struct Bounds {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Bounds {
    fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(|s| parse_bound(s, "start")),
            end: end.and_then(|s| parse_bound(s, "end")),
        }
    }

    fn admits(&self, date: &str) -> bool {
        let Some(at) = parse_date(date) else {
            return true;
        };
        let before_start = self.start.is_some_and(|start| at < start);
        let after_end = self.end.is_some_and(|end| at > end);
        !(before_start || after_end)
    }
}

fn parse_bound(text: &str, side: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_date(text);
    if parsed.is_none() {
        debug!(bound = side, value = text, "ignoring unparsable date bound");
    }
    parsed
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Keep the sales whose `date_sold` lies within `[start_date, end_date]`.
///
/// With no bounds the input is returned as-is (cloned).
pub fn filter_sales_by_date_range(
    sales: &[Sale],
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<Sale> {
    if start_date.is_none() && end_date.is_none() {
        return sales.to_vec();
    }
    let bounds = Bounds::parse(start_date, end_date);
    sales
        .iter()
        .filter(|sale| bounds.admits(&sale.date_sold))
        .cloned()
        .collect()
}
