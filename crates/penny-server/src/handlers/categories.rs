//! Category handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State};
use serde::Deserialize;

use crate::{ok, parse_json, ApiResult, AppError, AppState};
use penny_core::models::Category;

/// Request body for creating a category
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub color: Option<String>,
}

/// GET /api/categories - List all categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Category>> {
    ok(state.db.list_categories()?)
}

/// POST /api/categories - Create a category
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Category> {
    let req: CreateCategoryRequest = parse_json(&body)?;

    let category = state
        .db
        .create_category(&req.name, req.color.as_deref())
        .map_err(AppError::from_core)?;

    ok(category)
}
