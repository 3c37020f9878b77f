//! Expense handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{parse_date_param, parse_id};
use crate::{ok, parse_json, ApiResult, AppError, AppState, MAX_PAGE_LIMIT};
use penny_core::models::{ExpenseCategory, ExpenseEntry, ExpenseFilter, NewExpenseEntry};

/// Request body for recording an expense
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
}

fn parse_category(value: &str) -> Result<ExpenseCategory, AppError> {
    value.parse().map_err(|e: String| AppError::bad_request(&e))
}

/// GET /api/expenses - List expenses with optional filters
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListExpensesQuery>,
) -> ApiResult<Vec<ExpenseEntry>> {
    let from = parse_date_param(params.from.as_deref(), "from")?;
    let to = parse_date_param(params.to.as_deref(), "to")?;
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(AppError::bad_request("from must not be after to"));
        }
    }

    let category = params
        .category
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(parse_category)
        .transpose()?;

    let limit = params
        .limit
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().ok().filter(|l| (1..=MAX_PAGE_LIMIT).contains(l)))
        .map(|parsed| {
            parsed.ok_or_else(|| {
                AppError::bad_request(&format!("limit must be between 1 and {}", MAX_PAGE_LIMIT))
            })
        })
        .transpose()?;

    let filter = ExpenseFilter {
        from,
        to,
        category,
        limit,
    };
    ok(state.db.list_expenses(&filter)?)
}

/// POST /api/expenses - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<ExpenseEntry> {
    let req: CreateExpenseRequest = parse_json(&body)?;

    let expense = NewExpenseEntry {
        amount: req.amount,
        description: req.description,
        category: parse_category(&req.category)?,
        date: req.date,
    };
    let created = state
        .db
        .insert_expense(&expense)
        .map_err(AppError::from_core)?;

    ok(created)
}

/// GET /api/expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<ExpenseEntry> {
    let id = parse_id(&id, "expense")?;
    let expense = state
        .db
        .get_expense(id)?
        .ok_or_else(|| AppError::not_found(&format!("Expense {} not found", id)))?;

    ok(expense)
}
