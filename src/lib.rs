//! Sales analytics for card and sealed product collections.
//!
//! Turns the collection backend's sale records and daily sales buckets into
//! dashboard numbers: revenue and profit totals, per-category rollups,
//! normalized chart points, and first-to-last trend classification.
//!
//! The engine in [`analysis`] is a set of pure functions that tolerate the
//! backend's inconsistent JSON (aliased field names, decimal wrappers, mixed
//! date formats). [`SalesAnalytics`] wires it to a [`SalesSource`] and keeps
//! the latest dashboard, discarding stale responses.
//!
//! # Quick start
//!
//! ```no_run
//! use collection_sales_analytics::{DateRange, SalesAnalytics};
//!
//! let analytics = SalesAnalytics::builder()
//!     .base_url("http://localhost:3000/api")
//!     .build()
//!     .unwrap();
//!
//! let outcome = analytics
//!     .refresh(&DateRange::between("2024-01-01", "2024-01-31"))
//!     .unwrap();
//! if let Some(dashboard) = outcome.dashboard() {
//!     println!("revenue: {}", dashboard.kpis.total_revenue);
//! }
//! ```

pub mod analysis;
#[cfg(feature = "async")]
pub mod async_client;
pub mod coerce;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod session;
pub mod source;

pub use analysis::{
    aggregate_by_category, calculate_kpis, calculate_trend_analysis, filter_sales_by_date_range,
    process_graph_data, process_graph_json, total_profit, total_revenue, DateRange,
    SalesDashboard,
};
#[cfg(feature = "async")]
pub use async_client::AsyncSalesAnalytics;
pub use coerce::coerce_financial_number;
pub use error::{AnalyticsError, Result};
pub use ingest::{graph_points_from_json, sales_from_json};
pub use session::{AnalyticsSession, RefreshOutcome};
pub use source::{HttpSalesSource, JsonFileSource, SalesSource};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SalesAnalyticsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesAnalytics`] instance.
///
/// Use [`SalesAnalytics::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesAnalyticsBuilder::build).
pub struct SalesAnalyticsBuilder {
    base_url: String,
    sales_path: String,
    graph_data_path: String,
    timeout: Duration,
    offline_dir: Option<PathBuf>,
    source: Option<Box<dyn SalesSource>>,
}

impl Default for SalesAnalyticsBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            sales_path: config::SALES_PATH.to_string(),
            graph_data_path: config::GRAPH_DATA_PATH.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            offline_dir: None,
            source: None,
        }
    }
}

impl SalesAnalyticsBuilder {
    /// Set the backend API base URL. Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the sales endpoint path, relative to the base URL.
    pub fn sales_path(mut self, path: &str) -> Self {
        self.sales_path = path.to_string();
        self
    }

    /// Set the graph data endpoint path, relative to the base URL.
    pub fn graph_data_path(mut self, path: &str) -> Self {
        self.graph_data_path = path.to_string();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `sales.json` and `graph-data.json` from a local directory instead
    /// of calling the backend.
    pub fn offline_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.offline_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Use a custom [`SalesSource`]. Takes precedence over every other
    /// source setting.
    pub fn source<S: SalesSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the analytics client.
    ///
    /// Does not contact the backend; data is fetched on the first refresh.
    pub fn build(self) -> Result<SalesAnalytics> {
        let source: Box<dyn SalesSource> = match (self.source, self.offline_dir) {
            (Some(source), _) => source,
            (None, Some(dir)) => Box::new(JsonFileSource::new(dir)?),
            (None, None) => Box::new(
                HttpSalesSource::new(&self.base_url, self.timeout)?
                    .with_paths(&self.sales_path, &self.graph_data_path),
            ),
        };
        Ok(SalesAnalytics {
            session: AnalyticsSession::new(source),
        })
    }
}

// ---------------------------------------------------------------------------
// SalesAnalytics
// ---------------------------------------------------------------------------

/// The main entry point: a configured source plus the latest dashboard.
///
/// Created via [`SalesAnalytics::builder()`].
pub struct SalesAnalytics {
    session: AnalyticsSession,
}

impl SalesAnalytics {
    /// Create a new builder for configuring the client.
    pub fn builder() -> SalesAnalyticsBuilder {
        SalesAnalyticsBuilder::default()
    }

    /// Fetch and publish the dashboard for `range`.
    ///
    /// See [`AnalyticsSession::refresh`] for how overlapping refreshes resolve.
    pub fn refresh(&self, range: &DateRange) -> Result<RefreshOutcome> {
        self.session.refresh(range)
    }

    /// The most recently published dashboard.
    pub fn latest(&self) -> Option<Arc<SalesDashboard>> {
        self.session.latest()
    }

    /// Fetch and compute a dashboard without publishing it.
    pub fn dashboard(&self, range: &DateRange) -> Result<SalesDashboard> {
        self.session.compute(range)
    }

    /// Return a reference to the underlying [`AnalyticsSession`].
    pub fn session(&self) -> &AnalyticsSession {
        &self.session
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SalesAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let latest = self.session.latest();
        write!(
            f,
            "SalesAnalytics(generation={}, latest_sales={})",
            self.session.generation(),
            latest.map_or(0, |d| d.sales_count)
        )
    }
}
