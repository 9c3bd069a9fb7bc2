//! First-to-last growth rates and trend classification.

use rust_decimal::Decimal;

use crate::coerce::{parse_date, percent_of, round_money, to_decimal};
use crate::config::TREND_THRESHOLD_PCT;
use crate::models::{GraphDataPoint, Trend, TrendResult};

/// Compare the earliest and latest points of a series.
///
/// The caller's slice is left untouched; points are ordered by date on a
/// copy, with unparsable dates placed last. Growth rates are percentages
/// rounded to cents, zero when the starting value is not positive. Only the
/// revenue growth rate drives the classification.
pub fn calculate_trend_analysis(points: &[GraphDataPoint]) -> TrendResult {
    if points.len() < 2 {
        return TrendResult::default();
    }

    let mut sorted: Vec<&GraphDataPoint> = points.iter().collect();
    sorted.sort_by_key(|p| {
        let at = parse_date(&p.date);
        (at.is_none(), at)
    });

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];

    let revenue_growth_rate = growth_rate(first.revenue, last.revenue);
    let profit_growth_rate = growth_rate(first.profit, last.profit);

    TrendResult {
        revenue_growth_rate,
        profit_growth_rate,
        trend: classify(revenue_growth_rate),
    }
}

fn growth_rate(first: f64, last: f64) -> f64 {
    let first = to_decimal(first);
    let last = to_decimal(last);
    if first <= Decimal::ZERO {
        return 0.0;
    }
    round_money(percent_of(last.saturating_sub(first), first))
}

fn classify(revenue_growth_rate: f64) -> Trend {
    if revenue_growth_rate > TREND_THRESHOLD_PCT {
        Trend::Up
    } else if revenue_growth_rate < -TREND_THRESHOLD_PCT {
        Trend::Down
    } else {
        Trend::Stable
    }
}
