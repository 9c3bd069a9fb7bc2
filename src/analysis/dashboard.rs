use serde::{Deserialize, Serialize};

use crate::models::{CategoryBreakdown, GraphDataPoint, KpiSet, RawGraphPoint, Sale, TrendResult};

use super::category::aggregate_by_category;
use super::filter::{filter_sales_by_date_range, DateRange};
use super::graph::{daily_graph_points, process_graph_data};
use super::kpi::calculate_kpis;
use super::trend::calculate_trend_analysis;

// ---------------------------------------------------------------------------
// SalesDashboard — Everything the analytics screen renders for one range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDashboard {
    pub range: DateRange,
    pub sales_count: usize,
    pub kpis: KpiSet,
    pub categories: CategoryBreakdown,
    pub graph_data: Vec<GraphDataPoint>,
    pub trend: TrendResult,
}

impl SalesDashboard {
    /// Derive a dashboard from fetched sales and graph buckets.
    ///
    /// Sales are narrowed to `range` before any aggregation. When the backend
    /// supplied no graph buckets, a daily rollup of the filtered sales is
    /// charted instead.
    pub fn compute(range: &DateRange, sales: &[Sale], raw_graph: &[RawGraphPoint]) -> Self {
        let sales = filter_sales_by_date_range(
            sales,
            range.start_date.as_deref(),
            range.end_date.as_deref(),
        );

        let graph_data = if raw_graph.is_empty() {
            daily_graph_points(&sales)
        } else {
            process_graph_data(raw_graph)
        };
        let trend = calculate_trend_analysis(&graph_data);

        Self {
            range: range.clone(),
            sales_count: sales.len(),
            kpis: calculate_kpis(&sales),
            categories: aggregate_by_category(&sales),
            graph_data,
            trend,
        }
    }
}
