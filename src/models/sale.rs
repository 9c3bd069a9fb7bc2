use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::coerce_decimal;
use crate::config;

// ---------------------------------------------------------------------------
// ItemCategory — Closed category taxonomy with an explicit escape hatch
// ---------------------------------------------------------------------------

/// The category a sold item belongs to.
///
/// Backend labels outside the three known ones are kept verbatim in
/// [`ItemCategory::Unrecognized`] so they can be logged; aggregation skips them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemCategory {
    PsaGradedCard,
    RawCard,
    SealedProduct,
    Unrecognized(String),
}

impl ItemCategory {
    /// The recognized categories, in report iteration order.
    pub const KNOWN: [ItemCategory; 3] = [
        ItemCategory::PsaGradedCard,
        ItemCategory::RawCard,
        ItemCategory::SealedProduct,
    ];

    /// Map a backend label onto the taxonomy. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            config::PSA_GRADED_CARD_LABEL => ItemCategory::PsaGradedCard,
            config::RAW_CARD_LABEL => ItemCategory::RawCard,
            config::SEALED_PRODUCT_LABEL => ItemCategory::SealedProduct,
            other => ItemCategory::Unrecognized(other.to_string()),
        }
    }

    /// The backend display label.
    pub fn label(&self) -> &str {
        match self {
            ItemCategory::PsaGradedCard => config::PSA_GRADED_CARD_LABEL,
            ItemCategory::RawCard => config::RAW_CARD_LABEL,
            ItemCategory::SealedProduct => config::SEALED_PRODUCT_LABEL,
            ItemCategory::Unrecognized(label) => label,
        }
    }

    /// The report key used in category breakdowns (e.g. `"sealedProduct"`).
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ItemCategory::PsaGradedCard => Some("psaGradedCard"),
            ItemCategory::RawCard => Some("rawCard"),
            ItemCategory::SealedProduct => Some("sealedProduct"),
            ItemCategory::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ItemCategory::Unrecognized(_))
    }
}

impl From<String> for ItemCategory {
    fn from(label: String) -> Self {
        ItemCategory::from_label(&label)
    }
}

impl From<ItemCategory> for String {
    fn from(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Unrecognized(label) => label,
            known => known.label().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sale — One completed transaction
// ---------------------------------------------------------------------------

/// A completed sale, as returned by the sales backend.
///
/// Deserialization never rejects a JSON object: prices go through
/// [`coerce_decimal`], and missing or mistyped fields fall back to empty
/// strings or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSale")]
pub struct Sale {
    pub id: String,
    pub item_category: ItemCategory,
    pub item_name: String,
    pub my_price: Decimal,
    pub actual_sold_price: Decimal,
    pub date_sold: String,
    pub source: String,
}

impl Sale {
    /// `actual_sold_price - my_price`. Negative for a loss. Saturates at the
    /// `Decimal` bounds.
    pub fn profit(&self) -> Decimal {
        self.actual_sold_price.saturating_sub(self.my_price)
    }
}

/// Wire shape of a sale before coercion. Every field is raw JSON so that no
/// backend quirk can fail deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSale {
    id: Value,
    #[serde(rename = "_id")]
    object_id: Value,
    #[serde(rename = "itemCategory")]
    item_category: Value,
    #[serde(rename = "itemName")]
    item_name: Value,
    #[serde(rename = "myPrice")]
    my_price: Value,
    #[serde(rename = "actualSoldPrice")]
    actual_sold_price: Value,
    #[serde(rename = "dateSold")]
    date_sold: Value,
    source: Value,
}

impl From<RawSale> for Sale {
    fn from(raw: RawSale) -> Self {
        let id = identifier(&raw.id)
            .or_else(|| identifier(&raw.object_id))
            .unwrap_or_default();
        Sale {
            id,
            item_category: ItemCategory::from_label(raw.item_category.as_str().unwrap_or("")),
            item_name: raw.item_name.as_str().unwrap_or("").to_string(),
            my_price: coerce_decimal(&raw.my_price),
            actual_sold_price: coerce_decimal(&raw.actual_sold_price),
            date_sold: date_text(&raw.date_sold),
            source: raw.source.as_str().unwrap_or("").to_string(),
        }
    }
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

// Dates arrive either as plain strings or as `{"$date": "..."}`.
fn date_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("$date")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    }
}
