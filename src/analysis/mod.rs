//! The sales analytics engine.
//!
//! Every function here is pure: it reads its arguments, allocates fresh
//! output, and never fails. Malformed input degrades to zero or empty
//! results instead of raising.

pub mod category;
pub mod dashboard;
pub mod filter;
pub mod graph;
pub mod kpi;
pub mod totals;
pub mod trend;

pub use category::aggregate_by_category;
pub use dashboard::SalesDashboard;
pub use filter::{filter_sales_by_date_range, DateRange};
pub use graph::{daily_graph_points, process_graph_data, process_graph_json};
pub use kpi::{best_performing_category, calculate_kpis};
pub use totals::{total_profit, total_revenue};
pub use trend::calculate_trend_analysis;
