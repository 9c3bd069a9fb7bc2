//! Fetch-then-compute orchestration with stale-response protection.
//!
//! Every [`AnalyticsSession::refresh`] claims a new request generation before
//! it touches the source. When it finishes, it only publishes its dashboard
//! if no newer refresh has started in the meantime, so a slow response for an
//! old date range can never overwrite the result for a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::analysis::{DateRange, SalesDashboard};
use crate::error::{AnalyticsError, Result};
use crate::source::SalesSource;

/// What happened to a refresh.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// The dashboard was computed and is now the session's latest.
    Applied(Arc<SalesDashboard>),
    /// A newer refresh started first; this result was discarded.
    Superseded { generation: u64, current: u64 },
}

impl RefreshOutcome {
    /// The published dashboard, if this refresh won.
    pub fn dashboard(&self) -> Option<&Arc<SalesDashboard>> {
        match self {
            RefreshOutcome::Applied(dashboard) => Some(dashboard),
            RefreshOutcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, RefreshOutcome::Superseded { .. })
    }
}

/// Holds a [`SalesSource`] and the most recent dashboard computed from it.
///
/// Safe to share across threads; concurrent refreshes resolve in favour of
/// whichever started last.
pub struct AnalyticsSession {
    source: Box<dyn SalesSource>,
    generation: AtomicU64,
    latest: Mutex<Option<Arc<SalesDashboard>>>,
}

impl AnalyticsSession {
    pub fn new(source: Box<dyn SalesSource>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Fetch sales and graph data for `range`, compute the dashboard, and
    /// publish it unless a newer refresh has started.
    ///
    /// Fetch errors are returned only when this refresh is still the newest;
    /// a failing stale request reports [`RefreshOutcome::Superseded`].
    pub fn refresh(&self, range: &DateRange) -> Result<RefreshOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self
            .source
            .fetch_sales(range)
            .and_then(|sales| Ok((sales, self.source.fetch_graph_data(range)?)));

        let (sales, raw_graph) = match fetched {
            Ok(data) => data,
            Err(e) => {
                let current = self.generation();
                if current == generation {
                    return Err(e);
                }
                debug!(generation, current, error = %e, "stale refresh failed; ignoring");
                return Ok(RefreshOutcome::Superseded { generation, current });
            }
        };

        let dashboard = Arc::new(SalesDashboard::compute(range, &sales, &raw_graph));

        let mut latest = self
            .latest
            .lock()
            .map_err(|_| AnalyticsError::InvalidArgument("Session lock poisoned".into()))?;
        let current = self.generation();
        if current != generation {
            debug!(generation, current, "discarding superseded dashboard");
            return Ok(RefreshOutcome::Superseded { generation, current });
        }
        *latest = Some(Arc::clone(&dashboard));
        Ok(RefreshOutcome::Applied(dashboard))
    }

    /// The most recently published dashboard.
    pub fn latest(&self) -> Option<Arc<SalesDashboard>> {
        self.latest.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of refreshes started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Fetch and compute a dashboard without publishing it or claiming a
    /// generation.
    pub fn compute(&self, range: &DateRange) -> Result<SalesDashboard> {
        let sales = self.source.fetch_sales(range)?;
        let raw_graph = self.source.fetch_graph_data(range)?;
        Ok(SalesDashboard::compute(range, &sales, &raw_graph))
    }

    pub fn source(&self) -> &dyn SalesSource {
        self.source.as_ref()
    }
}
