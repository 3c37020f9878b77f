//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod health;
pub mod wages;

// Re-export all handlers for use in router
pub use analytics::*;
pub use budgets::*;
pub use categories::*;
pub use expenses::*;
pub use health::*;
pub use wages::*;

use chrono::NaiveDate;

use crate::AppError;

/// Parse an optional `YYYY-MM-DD` query parameter
pub(crate) fn parse_date_param(
    value: Option<&str>,
    name: &str,
) -> Result<Option<NaiveDate>, AppError> {
    value
        .filter(|s| !s.is_empty())
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .map_err(|_| AppError::bad_request(&format!("Invalid {} date format (use YYYY-MM-DD)", name)))
}

/// Parse a numeric path id; anything else is a 400
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(&format!("Invalid {} id: {}", resource, raw)))
}
