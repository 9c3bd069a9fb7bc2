//! Shared fixtures for the sales analytics integration tests.
//!
//! Sales are built from JSON the way the backend sends them, so every test
//! also goes through the lenient deserialization path.

#![allow(dead_code)]

use collection_sales_analytics::models::{GraphDataPoint, RawGraphPoint, Sale};
use collection_sales_analytics::{sales_from_json, DateRange, Result, SalesSource};
use serde_json::{json, Value};

/// Build one sale from its category label, cost basis, sale price and date.
pub fn sale(category: &str, my_price: Value, sold: Value, date: &str) -> Sale {
    serde_json::from_value(json!({
        "id": format!("{category}-{date}"),
        "itemCategory": category,
        "itemName": "Charizard",
        "myPrice": my_price,
        "actualSoldPrice": sold,
        "dateSold": date,
        "source": "eBay"
    }))
    .unwrap()
}

/// The four-sale portfolio used across the KPI and category tests.
///
/// Revenue 94 500, profit 11 800; sealed product is the top category.
pub fn portfolio_json() -> Value {
    json!([
        {
            "id": "sale-001",
            "itemCategory": "PSA Graded Card",
            "itemName": "Charizard PSA 10",
            "myPrice": 4000,
            "actualSoldPrice": 5500,
            "dateSold": "2024-01-05T10:00:00Z",
            "source": "eBay"
        },
        {
            "id": "sale-002",
            "itemCategory": "Raw Card",
            "itemName": "Blastoise",
            "myPrice": {"$numberDecimal": "1200"},
            "actualSoldPrice": "1800",
            "dateSold": "2024-01-12T10:00:00Z",
            "source": "Facebook"
        },
        {
            "id": "sale-003",
            "itemCategory": "Sealed Product",
            "itemName": "Base Set Booster Box",
            "myPrice": 75000,
            "actualSoldPrice": {"$numberDecimal": "85000.00"},
            "dateSold": "2024-01-20T10:00:00Z",
            "source": "Auction"
        },
        {
            "id": "sale-004",
            "itemCategory": "PSA Graded Card",
            "itemName": "Venusaur PSA 9",
            "myPrice": 2500,
            "actualSoldPrice": 2200,
            "dateSold": "2024-02-02T10:00:00Z",
            "source": "eBay"
        }
    ])
}

pub fn portfolio() -> Vec<Sale> {
    sales_from_json(&portfolio_json())
}

pub fn point(date: &str, revenue: f64, profit: f64) -> GraphDataPoint {
    GraphDataPoint {
        date: date.to_string(),
        revenue,
        profit,
        items_sold: 1.0,
        average_margin: 0.0,
    }
}

pub fn raw_point(value: Value) -> RawGraphPoint {
    serde_json::from_value(value).unwrap()
}

/// An in-memory source returning fixed data regardless of range.
pub struct FixedSource {
    pub sales: Vec<Sale>,
    pub graph: Vec<RawGraphPoint>,
}

impl SalesSource for FixedSource {
    fn fetch_sales(&self, _range: &DateRange) -> Result<Vec<Sale>> {
        Ok(self.sales.clone())
    }

    fn fetch_graph_data(&self, _range: &DateRange) -> Result<Vec<RawGraphPoint>> {
        Ok(self.graph.clone())
    }
}
