//! Async wrapper around [`SalesAnalytics`] for use in async runtimes (Tokio, etc.).
//!
//! Fetching is blocking HTTP or file I/O, so every operation runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`]. Overlapping
//! refreshes still resolve through the session's request generation: the one
//! started last wins, regardless of completion order.
//!
//! # Example
//!
//! ```no_run
//! use collection_sales_analytics::{AsyncSalesAnalytics, DateRange, SalesAnalytics};
//!
//! #[tokio::main]
//! async fn main() {
//!     let analytics = AsyncSalesAnalytics::build(SalesAnalytics::builder())
//!         .await
//!         .unwrap();
//!
//!     let outcome = analytics.refresh(DateRange::all()).await.unwrap();
//!     println!("superseded: {}", outcome.is_superseded());
//! }
//! ```

use std::sync::Arc;

use crate::analysis::{DateRange, SalesDashboard};
use crate::error::{AnalyticsError, Result};
use crate::session::RefreshOutcome;
use crate::{SalesAnalytics, SalesAnalyticsBuilder};

/// Async wrapper around [`SalesAnalytics`].
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct AsyncSalesAnalytics {
    inner: Arc<SalesAnalytics>,
}

impl AsyncSalesAnalytics {
    /// Build from a configured [`SalesAnalyticsBuilder`].
    ///
    /// Construction runs on the blocking thread pool since the HTTP client
    /// must not be created on an async worker.
    pub async fn build(builder: SalesAnalyticsBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let analytics = builder.build()?;
            Ok(AsyncSalesAnalytics {
                inner: Arc::new(analytics),
            })
        })
        .await
        .map_err(|e| AnalyticsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesAnalytics) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let analytics = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&analytics))
            .await
            .map_err(|e| AnalyticsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch and publish the dashboard for `range`.
    pub async fn refresh(&self, range: DateRange) -> Result<RefreshOutcome> {
        self.run(move |a| a.refresh(&range)).await
    }

    /// Fetch and compute a dashboard without publishing it.
    pub async fn dashboard(&self, range: DateRange) -> Result<SalesDashboard> {
        self.run(move |a| a.dashboard(&range)).await
    }

    /// The most recently published dashboard.
    pub fn latest(&self) -> Option<Arc<SalesDashboard>> {
        self.inner.latest()
    }
}
