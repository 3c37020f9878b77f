//! Analytics handlers
//!
//! Period summaries, budget evaluation, trends and insights computed from
//! stored wages and expenses.

use std::sync::Arc;

use axum::extract::{Query, State};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::parse_date_param;
use crate::{ok, ApiResult, AppError, AppState};
use penny_core::insights::generate_insights;
use penny_core::models::{
    BudgetResult, DateRange, FinancialSummary, MonthlyTotals, Overview, PeriodInfo, PeriodUnit,
    SpendingTrend,
};
use penny_core::period::period_info_at;

/// Default number of months in the monthly series
const DEFAULT_MONTHS: u32 = 12;

/// Longest monthly series served
const MAX_MONTHS: u32 = 120;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// month, quarter or year (default month)
    pub period: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub period: Option<String>,
    /// Custom start date (YYYY-MM-DD), requires `to`
    pub from: Option<String>,
    /// Custom end date (YYYY-MM-DD), requires `from`
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub months: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_unit(period: Option<&str>) -> Result<PeriodUnit, AppError> {
    match period.filter(|s| !s.is_empty()) {
        Some(p) => p.parse().map_err(|e: String| AppError::bad_request(&e)),
        None => Ok(PeriodUnit::default()),
    }
}

fn resolve_period(period: Option<&str>, today: NaiveDate) -> Result<PeriodInfo, AppError> {
    Ok(period_info_at(parse_unit(period)?, today))
}

/// GET /api/analytics/period - Current and previous range for a period
pub async fn analytics_period(Query(params): Query<PeriodQuery>) -> ApiResult<PeriodInfo> {
    ok(resolve_period(params.period.as_deref(), today())?)
}

/// GET /api/analytics/summary - Totals, savings rate and top categories
pub async fn analytics_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> ApiResult<FinancialSummary> {
    let today = today();

    let from = parse_date_param(params.from.as_deref(), "from")?;
    let to = parse_date_param(params.to.as_deref(), "to")?;
    let range = match (from, to) {
        (Some(from), Some(to)) => DateRange::new(from, to).map_err(AppError::from_core)?,
        (None, None) => resolve_period(params.period.as_deref(), today)?.current,
        _ => return Err(AppError::bad_request("from and to must be given together")),
    };

    tracing::debug!(range = %range, "Summary requested");
    ok(state.db.summary_report(&range, today)?)
}

/// GET /api/analytics/budgets - Budget usage for the current period
pub async fn analytics_budgets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> ApiResult<Vec<BudgetResult>> {
    let today = today();
    let period = resolve_period(params.period.as_deref(), today)?;
    ok(state.db.budget_report(&period, today)?)
}

/// GET /api/analytics/trend - Spending change against the previous period
pub async fn analytics_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> ApiResult<SpendingTrend> {
    let today = today();
    let period = resolve_period(params.period.as_deref(), today)?;
    ok(state.db.trend_report(&period, today)?)
}

/// GET /api/analytics/insights - Insight messages for the current period
pub async fn analytics_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> ApiResult<Vec<String>> {
    let today = today();
    let period = resolve_period(params.period.as_deref(), today)?;

    let summary = state.db.summary_report(&period.current, today)?;
    let budgets = state.db.budget_report(&period, today)?;
    let trend = state.db.trend_report(&period, today)?;

    ok(generate_insights(&summary, &budgets, &trend))
}

/// GET /api/analytics/overview - Everything for the dashboard in one call
pub async fn analytics_overview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> ApiResult<Overview> {
    let unit = parse_unit(params.period.as_deref())?;
    ok(state.db.overview(unit, today())?)
}

/// GET /api/analytics/monthly - Income and expenses per month
pub async fn analytics_monthly(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthlyQuery>,
) -> ApiResult<Vec<MonthlyTotals>> {
    let months = match params.months.as_deref().filter(|s| !s.is_empty()) {
        Some(m) => m
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=MAX_MONTHS).contains(m))
            .ok_or_else(|| {
                AppError::bad_request(&format!("months must be between 1 and {}", MAX_MONTHS))
            })?,
        None => DEFAULT_MONTHS,
    };

    ok(state.db.monthly_report(today(), months)?)
}
