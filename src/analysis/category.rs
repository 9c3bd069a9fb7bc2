//! Per-category rollups of count, revenue and profit.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::coerce::round_money;
use crate::models::{CategoryAggregate, CategoryBreakdown, ItemCategory, Sale};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: u64,
    revenue: Decimal,
    profit: Decimal,
}

impl Tally {
    fn add(&mut self, sale: &Sale) {
        self.count += 1;
        self.revenue = self.revenue.saturating_add(sale.actual_sold_price);
        self.profit = self.profit.saturating_add(sale.profit());
    }

    fn finish(self) -> CategoryAggregate {
        CategoryAggregate {
            count: self.count,
            revenue: round_money(self.revenue),
            profit: round_money(self.profit),
        }
    }
}

/// Roll sales up into the three known categories.
///
/// All three categories are always present, zeroed when empty. Sales with an
/// unrecognized category are left out of every aggregate; how many were
/// skipped is logged.
pub fn aggregate_by_category(sales: &[Sale]) -> CategoryBreakdown {
    let mut psa = Tally::default();
    let mut raw = Tally::default();
    let mut sealed = Tally::default();
    let mut dropped = 0usize;

    for sale in sales {
        match &sale.item_category {
            ItemCategory::PsaGradedCard => psa.add(sale),
            ItemCategory::RawCard => raw.add(sale),
            ItemCategory::SealedProduct => sealed.add(sale),
            ItemCategory::Unrecognized(label) => {
                debug!(sale_id = %sale.id, label = %label, "sale has unrecognized item category");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        warn!(dropped, "skipped sales with unrecognized item category");
    }

    CategoryBreakdown {
        psa_graded_card: psa.finish(),
        raw_card: raw.finish(),
        sealed_product: sealed.finish(),
    }
}
