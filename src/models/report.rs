use serde::{Deserialize, Serialize};

use super::sale::ItemCategory;

// ---------------------------------------------------------------------------
// CategoryAggregate — Per-category rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub count: u64,
    pub revenue: f64,
    pub profit: f64,
}

// ---------------------------------------------------------------------------
// CategoryBreakdown — All three categories, always present
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub psa_graded_card: CategoryAggregate,
    pub raw_card: CategoryAggregate,
    pub sealed_product: CategoryAggregate,
}

impl CategoryBreakdown {
    /// Look up the aggregate for a category. `None` for unrecognized ones.
    pub fn get(&self, category: &ItemCategory) -> Option<&CategoryAggregate> {
        match category {
            ItemCategory::PsaGradedCard => Some(&self.psa_graded_card),
            ItemCategory::RawCard => Some(&self.raw_card),
            ItemCategory::SealedProduct => Some(&self.sealed_product),
            ItemCategory::Unrecognized(_) => None,
        }
    }

    /// `(key, aggregate)` pairs in fixed order: PSA graded, raw, sealed.
    pub fn entries(&self) -> [(&'static str, &CategoryAggregate); 3] {
        [
            ("psaGradedCard", &self.psa_graded_card),
            ("rawCard", &self.raw_card),
            ("sealedProduct", &self.sealed_product),
        ]
    }
}

// ---------------------------------------------------------------------------
// TrendResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub revenue_growth_rate: f64,
    pub profit_growth_rate: f64,
    pub trend: Trend,
}

// ---------------------------------------------------------------------------
// KpiSet — Dashboard summary numbers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub average_margin: f64,
    pub total_items: u64,
    pub average_sale_price: f64,
    /// Category key with the highest revenue, or empty when nothing sold.
    pub best_performing_category: String,
    /// Always equal to `average_margin`.
    pub profitability_ratio: f64,
}
