//! Budget comparator

use crate::models::{Budget, BudgetResult, BudgetStatus, DateRange, PeriodUnit, Transaction};
use crate::period::period_info;
use crate::summary::percentage;

/// Spending above this share of the budget counts as on track rather than under
pub const ONTRACK_THRESHOLD: f64 = 80.0;

/// Spending above this share of the budget is over
pub const OVER_THRESHOLD: f64 = 100.0;

/// Compare spending in the current `unit` period against each budget
pub fn evaluate_budgets(
    transactions: &[Transaction],
    budgets: &[Budget],
    unit: PeriodUnit,
) -> Vec<BudgetResult> {
    evaluate_budgets_in(transactions, budgets, &period_info(unit).current)
}

/// Compare spending inside `range` against each budget, keeping budget order
pub fn evaluate_budgets_in(
    transactions: &[Transaction],
    budgets: &[Budget],
    range: &DateRange,
) -> Vec<BudgetResult> {
    budgets
        .iter()
        .map(|budget| {
            let spent_amount: f64 = transactions
                .iter()
                .filter(|tx| {
                    tx.is_expense()
                        && range.contains(tx.date)
                        && tx.category == budget.category.as_str()
                })
                .map(|tx| tx.amount)
                .sum();
            let percent_used = percentage(spent_amount, budget.amount);

            BudgetResult {
                budget_id: budget.id,
                category: budget.category,
                budget_amount: budget.amount,
                spent_amount,
                percent_used,
                status: classify(percent_used),
            }
        })
        .collect()
}

/// Status for a percentage of budget used. 80 exactly is under, 100 exactly is on track.
pub fn classify(percent_used: f64) -> BudgetStatus {
    if percent_used > OVER_THRESHOLD {
        BudgetStatus::Over
    } else if percent_used > ONTRACK_THRESHOLD {
        BudgetStatus::OnTrack
    } else {
        BudgetStatus::Under
    }
}
