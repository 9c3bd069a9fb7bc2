//! Dashboard KPI composition.

use rust_decimal::Decimal;

use crate::coerce::{percent_of, round_money};
use crate::models::{CategoryBreakdown, KpiSet, Sale};

use super::category::aggregate_by_category;
use super::totals::{profit_sum, revenue_sum};

/// Compute the dashboard summary for a set of sales.
///
/// Sums are kept exact and only rounded to cents on the way out.
/// `total_items` counts every sale, including ones with an unrecognized
/// category.
pub fn calculate_kpis(sales: &[Sale]) -> KpiSet {
    let revenue = revenue_sum(sales);
    let profit = profit_sum(sales);
    let total_items = sales.len() as u64;

    let average_sale_price = if total_items == 0 {
        Decimal::ZERO
    } else {
        revenue
            .checked_div(Decimal::from(total_items))
            .unwrap_or(Decimal::ZERO)
    };
    let average_margin = round_money(percent_of(profit, revenue));

    KpiSet {
        total_revenue: round_money(revenue),
        total_profit: round_money(profit),
        average_margin,
        total_items,
        average_sale_price: round_money(average_sale_price),
        best_performing_category: best_performing_category(&aggregate_by_category(sales)),
        profitability_ratio: average_margin,
    }
}

/// Key of the category with strictly the greatest revenue.
///
/// Ties go to the earlier category in [`CategoryBreakdown::entries`] order.
/// Returns an empty string when no category has positive revenue.
pub fn best_performing_category(breakdown: &CategoryBreakdown) -> String {
    let mut best = "";
    let mut best_revenue = 0.0;
    for (key, aggregate) in breakdown.entries() {
        if aggregate.revenue > best_revenue {
            best = key;
            best_revenue = aggregate.revenue;
        }
    }
    best.to_string()
}
