//! Aggregation engine
//!
//! Pure functions over caller-supplied transaction lists: period summaries
//! with ranked categories, wage projections and monthly series. Nothing here
//! touches the database or retains state between calls.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    CategoryTotal, DateRange, FinancialSummary, MonthlyTotals, Transaction, TransactionType,
    WageEntry, WageSummary, WAGE_CATEGORY,
};
use crate::period::{month_start, shift_months};

/// Number of categories reported in `FinancialSummary::top_categories`
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// `part` as a percentage of `whole`, defined as 0 when `whole` is 0
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

/// Summarize the transactions dated inside `range` (both endpoints included).
///
/// Top categories are ranked by amount descending. Equal amounts keep the
/// order in which their category was first seen in `transactions`.
pub fn summarize(transactions: &[Transaction], range: &DateRange) -> FinancialSummary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut by_category: Vec<(String, f64)> = Vec::new();

    for tx in transactions.iter().filter(|tx| range.contains(tx.date)) {
        match tx.transaction_type {
            TransactionType::Income => total_income += tx.amount,
            TransactionType::Expense => {
                total_expenses += tx.amount;
                match by_category.iter_mut().find(|(name, _)| *name == tx.category) {
                    Some((_, sum)) => *sum += tx.amount,
                    None => by_category.push((tx.category.clone(), tx.amount)),
                }
            }
        }
    }

    let net_savings = total_income - total_expenses;

    // sort_by is stable, so ties stay in first-seen order
    by_category.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let top_categories = by_category
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: percentage(amount, total_expenses),
        })
        .collect();

    FinancialSummary {
        total_income,
        total_expenses,
        net_savings,
        savings_rate: percentage(net_savings, total_income),
        top_categories,
    }
}

/// Chronological order for wage entries: effective date, then creation time
fn wage_order(a: &WageEntry, b: &WageEntry) -> Ordering {
    a.effective_date
        .cmp(&b.effective_date)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// The wage in force: latest effective date, ties broken by latest creation
pub fn current_wage(wages: &[WageEntry]) -> Option<&WageEntry> {
    wages.iter().max_by(|a, b| wage_order(a, b))
}

/// Current monthly wage projected over a year
pub fn wage_summary(wages: &[WageEntry]) -> WageSummary {
    let current = current_wage(wages).cloned();
    let monthly_amount = current.as_ref().map(|w| w.monthly_amount).unwrap_or(0.0);

    WageSummary {
        current,
        monthly_amount,
        annual_amount: monthly_amount * 12.0,
        history_count: wages.len(),
    }
}

/// Expand wage entries into one income transaction per month they were in force.
///
/// An entry applies from its effective month until the month before the next
/// entry takes effect. The latest entry runs through the month containing
/// `through`. The first month's income is dated on the effective date, later
/// months on the 1st.
pub fn wage_transactions(wages: &[WageEntry], through: NaiveDate) -> Vec<Transaction> {
    // Entries not yet in force cannot end the one that is
    let mut ordered: Vec<&WageEntry> = wages
        .iter()
        .filter(|w| w.effective_date <= through)
        .collect();
    ordered.sort_by(|a, b| wage_order(a, b));

    let through_month = (through.year(), through.month());
    let mut transactions = Vec::new();

    for (i, entry) in ordered.iter().enumerate() {
        let first = (entry.effective_date.year(), entry.effective_date.month());
        let last = match ordered.get(i + 1) {
            Some(next) => {
                let superseded =
                    shift_months(next.effective_date.year(), next.effective_date.month(), -1);
                superseded.min(through_month)
            }
            None => through_month,
        };

        let description = entry.description.as_deref().unwrap_or("Monthly wage");
        let mut month = first;
        while month <= last {
            let date = if month == first {
                entry.effective_date
            } else {
                month_start(month.0, month.1)
            };
            transactions.push(Transaction::income(
                entry.monthly_amount,
                date,
                WAGE_CATEGORY,
                description,
            ));
            month = shift_months(month.0, month.1, 1);
        }
    }

    transactions
}

/// Income, expenses and net for every calendar month touched by `range`
pub fn monthly_totals(transactions: &[Transaction], range: &DateRange) -> Vec<MonthlyTotals> {
    let last = (range.end.year(), range.end.month());
    let mut month = (range.start.year(), range.start.month());
    let mut series = Vec::new();

    while month <= last {
        let mut income = 0.0;
        let mut expenses = 0.0;

        for tx in transactions.iter().filter(|tx| {
            range.contains(tx.date) && (tx.date.year(), tx.date.month()) == month
        }) {
            match tx.transaction_type {
                TransactionType::Income => income += tx.amount,
                TransactionType::Expense => expenses += tx.amount,
            }
        }

        series.push(MonthlyTotals {
            month: format!("{:04}-{:02}", month.0, month.1),
            income,
            expenses,
            net: income - expenses,
        });
        month = shift_months(month.0, month.1, 1);
    }

    series
}
