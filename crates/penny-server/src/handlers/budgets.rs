//! Budget handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::{ok, parse_json, ApiResult, AppError, AppState};
use penny_core::models::{Budget, ExpenseCategory};

/// Request body for creating or replacing a budget
#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// GET /api/budgets - List budgets
pub async fn list_budgets(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Budget>> {
    ok(state.db.list_budgets()?)
}

/// PUT /api/budgets - Create or replace the budget for a category
pub async fn upsert_budget(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Budget> {
    let req: UpsertBudgetRequest = parse_json(&body)?;
    let category: ExpenseCategory = req
        .category
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let budget = state
        .db
        .upsert_budget(category, req.amount)
        .map_err(AppError::from_core)?;

    ok(budget)
}

/// DELETE /api/budgets/:id - Remove a budget
pub async fn delete_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<DeletedResponse> {
    let id = parse_id(&id, "budget")?;
    if !state.db.delete_budget(id)? {
        return Err(AppError::not_found(&format!("Budget {} not found", id)));
    }

    ok(DeletedResponse { deleted: true })
}
