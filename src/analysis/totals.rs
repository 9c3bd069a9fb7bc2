//! Revenue and profit totals over a set of sales.

use rust_decimal::Decimal;

use crate::coerce::{round_money, sum_money};
use crate::models::Sale;

/// Sum of `actual_sold_price` over all sales, rounded to cents.
pub fn total_revenue(sales: &[Sale]) -> f64 {
    round_money(revenue_sum(sales))
}

/// Sum of per-sale profit over all sales, rounded to cents.
///
/// Losses count negatively; nothing is clamped at zero.
pub fn total_profit(sales: &[Sale]) -> f64 {
    round_money(profit_sum(sales))
}

pub(crate) fn revenue_sum(sales: &[Sale]) -> Decimal {
    sum_money(sales.iter().map(|s| s.actual_sold_price))
}

pub(crate) fn profit_sum(sales: &[Sale]) -> Decimal {
    sum_money(sales.iter().map(Sale::profit))
}
