//! Where sales and graph buckets come from.
//!
//! [`HttpSalesSource`] talks to the collection backend over HTTP;
//! [`JsonFileSource`] reads the same payloads from a local directory for
//! offline use and fixtures. Both hand back typed, coerced records.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::analysis::DateRange;
use crate::config;
use crate::error::{AnalyticsError, Result};
use crate::ingest::{graph_points_from_json, sales_from_json};
use crate::models::{RawGraphPoint, Sale};

// ---------------------------------------------------------------------------
// SalesSource
// ---------------------------------------------------------------------------

/// A provider of sales records and pre-aggregated graph buckets.
pub trait SalesSource: Send + Sync {
    /// Sales sold within `range`.
    fn fetch_sales(&self, range: &DateRange) -> Result<Vec<Sale>>;

    /// Graph buckets covering `range`. An empty list is valid.
    fn fetch_graph_data(&self, range: &DateRange) -> Result<Vec<RawGraphPoint>>;
}

// ---------------------------------------------------------------------------
// HttpSalesSource
// ---------------------------------------------------------------------------

/// Fetches sales over HTTP from the collection backend.
pub struct HttpSalesSource {
    base_url: String,
    sales_path: String,
    graph_data_path: String,
    client: Client,
}

impl HttpSalesSource {
    /// Create a source rooted at `base_url` using the default endpoint paths.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            sales_path: config::SALES_PATH.to_string(),
            graph_data_path: config::GRAPH_DATA_PATH.to_string(),
            client,
        })
    }

    /// Override the endpoint paths (relative to the base URL).
    pub fn with_paths(mut self, sales_path: &str, graph_data_path: &str) -> Self {
        self.sales_path = sales_path.to_string();
        self.graph_data_path = graph_data_path.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_json(&self, path: &str, range: &DateRange) -> Result<Value> {
        let url = self.endpoint(path);
        debug!(%url, ?range, "fetching");
        let resp = self
            .client
            .get(&url)
            .query(&range.query_params())
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }
}

impl SalesSource for HttpSalesSource {
    fn fetch_sales(&self, range: &DateRange) -> Result<Vec<Sale>> {
        let payload = self.get_json(&self.sales_path, range)?;
        Ok(sales_from_json(&payload))
    }

    fn fetch_graph_data(&self, range: &DateRange) -> Result<Vec<RawGraphPoint>> {
        let payload = self.get_json(&self.graph_data_path, range)?;
        Ok(graph_points_from_json(&payload))
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Reads `sales.json` and `graph-data.json` from a directory.
///
/// The sales file is required; a missing graph data file means "no
/// buckets". The date range is applied locally, with the same semantics as
/// [`filter_sales_by_date_range`](crate::analysis::filter_sales_by_date_range).
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(AnalyticsError::NotFound(format!(
                "Offline data directory {} does not exist",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load(&self, filename: &str) -> Result<Option<Value>> {
        let path = self.dir.join(filename);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

impl SalesSource for JsonFileSource {
    fn fetch_sales(&self, range: &DateRange) -> Result<Vec<Sale>> {
        let payload = self.load(config::SALES_FILE)?.ok_or_else(|| {
            AnalyticsError::NotFound(format!(
                "{} not found in {}",
                config::SALES_FILE,
                self.dir.display()
            ))
        })?;
        let mut sales = sales_from_json(&payload);
        sales.retain(|sale| range.contains(&sale.date_sold));
        Ok(sales)
    }

    fn fetch_graph_data(&self, range: &DateRange) -> Result<Vec<RawGraphPoint>> {
        let Some(payload) = self.load(config::GRAPH_DATA_FILE)? else {
            return Ok(Vec::new());
        };
        let mut points = graph_points_from_json(&payload);
        points.retain(|point| range.contains(point.resolved_date().unwrap_or_default()));
        Ok(points)
    }
}
