use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

pub const SALES_PATH: &str = "sales";
pub const GRAPH_DATA_PATH: &str = "sales/graph-data";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Offline fixture files, looked up inside the directory given to
// `SalesAnalyticsBuilder::offline_dir`.
pub const SALES_FILE: &str = "sales.json";
pub const GRAPH_DATA_FILE: &str = "graph-data.json";

/// Revenue growth (in percent) beyond which a series is classified as
/// trending up, and below whose negation it is trending down.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

pub const PSA_GRADED_CARD_LABEL: &str = "PSA Graded Card";
pub const RAW_CARD_LABEL: &str = "Raw Card";
pub const SEALED_PRODUCT_LABEL: &str = "Sealed Product";

/// Query parameter names understood by the sales backend.
pub const START_DATE_PARAM: &str = "startDate";
pub const END_DATE_PARAM: &str = "endDate";
