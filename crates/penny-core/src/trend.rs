//! Trend detector
//!
//! Compares expense totals between the current and previous period.

use crate::models::{
    DateRange, PeriodInfo, PeriodUnit, SpendingTrend, Transaction, TrendDirection,
};
use crate::period::period_info;
use crate::summary::percentage;

/// Changes within this many percent either way are stable
pub const STABLE_BAND: f64 = 5.0;

/// Spending trend for `unit`, using today's periods
pub fn detect_trend(transactions: &[Transaction], unit: PeriodUnit) -> SpendingTrend {
    detect_trend_for(transactions, &period_info(unit))
}

/// Spending trend between the two ranges of `period`
pub fn detect_trend_for(transactions: &[Transaction], period: &PeriodInfo) -> SpendingTrend {
    let current = expenses_in(transactions, &period.current);
    let previous = expenses_in(transactions, &period.previous);

    let change_percent = percentage(current - previous, previous);

    SpendingTrend {
        current,
        previous,
        change_percent,
        trending: classify(change_percent),
    }
}

/// Direction for a percentage change. Exactly +/-5 is stable.
pub fn classify(change_percent: f64) -> TrendDirection {
    if change_percent > STABLE_BAND {
        TrendDirection::Up
    } else if change_percent < -STABLE_BAND {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

fn expenses_in(transactions: &[Transaction], range: &DateRange) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_expense() && range.contains(tx.date))
        .map(|tx| tx.amount)
        .sum()
}
