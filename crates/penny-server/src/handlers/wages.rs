//! Wage handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State};

use crate::{ok, parse_json, ApiResult, AppError, AppState};
use penny_core::models::{NewWageEntry, WageEntry, WageSummary};
use penny_core::summary::wage_summary;

/// GET /api/wages - Wage history, most recent first
pub async fn list_wages(State(state): State<Arc<AppState>>) -> ApiResult<Vec<WageEntry>> {
    ok(state.db.list_wages()?)
}

/// POST /api/wages - Record a wage entry
pub async fn create_wage(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<WageEntry> {
    let req: NewWageEntry = parse_json(&body)?;
    let wage = state.db.insert_wage(&req).map_err(AppError::from_core)?;
    ok(wage)
}

/// GET /api/wages/current - Current wage with its annual projection
pub async fn current_wage(State(state): State<Arc<AppState>>) -> ApiResult<WageSummary> {
    let wages = state.db.list_wages()?;
    ok(wage_summary(&wages))
}
