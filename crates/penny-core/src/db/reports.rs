//! Spending reports
//!
//! Loads stored data and hands it to the pure analytics functions. Wage
//! income is projected no later than `today` so that ranges reaching into
//! the future do not count salary that has not been paid yet.

use chrono::NaiveDate;

use super::Database;
use crate::budget::evaluate_budgets_in;
use crate::error::Result;
use crate::insights::generate_insights;
use crate::models::*;
use crate::period::{period_info_at, trailing_months};
use crate::summary::{monthly_totals, summarize, wage_summary};
use crate::trend::detect_trend_for;

impl Database {
    /// Financial summary for `range`
    pub fn summary_report(&self, range: &DateRange, today: NaiveDate) -> Result<FinancialSummary> {
        let transactions = self.list_transactions(range.end.min(today))?;
        Ok(summarize(&transactions, range))
    }

    /// Budget evaluation for the current range of `period`
    pub fn budget_report(&self, period: &PeriodInfo, today: NaiveDate) -> Result<Vec<BudgetResult>> {
        let transactions = self.list_transactions(today)?;
        let budgets = self.list_budgets()?;
        Ok(evaluate_budgets_in(&transactions, &budgets, &period.current))
    }

    /// Expense trend between the previous and current range of `period`
    pub fn trend_report(&self, period: &PeriodInfo, today: NaiveDate) -> Result<SpendingTrend> {
        let transactions = self.list_transactions(today)?;
        Ok(detect_trend_for(&transactions, period))
    }

    /// Summary, budgets, trend, insights and wage for one period
    pub fn overview(&self, unit: PeriodUnit, today: NaiveDate) -> Result<Overview> {
        let period = period_info_at(unit, today);
        let transactions = self.list_transactions(period.current.end.min(today))?;
        let budgets = self.list_budgets()?;
        let wages = self.list_wages()?;

        let summary = summarize(&transactions, &period.current);
        let budget_results = evaluate_budgets_in(&transactions, &budgets, &period.current);
        let trend = detect_trend_for(&transactions, &period);
        let insights = generate_insights(&summary, &budget_results, &trend);

        tracing::debug!(
            period = %period.label,
            transactions = transactions.len(),
            insights = insights.len(),
            "Built overview"
        );

        Ok(Overview {
            period,
            summary,
            budgets: budget_results,
            trend,
            insights,
            wage: wage_summary(&wages),
        })
    }

    /// Monthly income and expense totals for the last `months` months
    pub fn monthly_report(&self, today: NaiveDate, months: u32) -> Result<Vec<MonthlyTotals>> {
        let range = trailing_months(today, months);
        let transactions = self.list_transactions(today)?;
        Ok(monthly_totals(&transactions, &range))
    }
}
