//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db)
//! - `wages` - Wage history commands
//! - `expenses` - Expense commands (list, add, delete)
//! - `categories` - Display category commands
//! - `budgets` - Budget commands (list, set, remove)
//! - `reports` - Summary, budget, trend, insight and monthly reports
//! - `export` - CSV export
//! - `serve` - Web server command

pub mod budgets;
pub mod categories;
pub mod core;
pub mod expenses;
pub mod export;
pub mod reports;
pub mod serve;
pub mod wages;

// Re-export command functions for main.rs
pub use budgets::*;
pub use categories::*;
pub use core::*;
pub use expenses::*;
pub use export::*;
pub use reports::*;
pub use serve::*;
pub use wages::*;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use penny_core::models::{ExpenseCategory, PeriodUnit};

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Parse a YYYY-MM-DD flag value
pub fn parse_date(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid --{} date format (use YYYY-MM-DD)", flag))
}

pub fn parse_optional_date(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    value.map(|v| parse_date(v, flag)).transpose()
}

pub fn parse_category(value: &str) -> Result<ExpenseCategory> {
    value.parse().map_err(|e: String| anyhow!(e))
}

pub fn parse_period(value: &str) -> Result<PeriodUnit> {
    value.parse().map_err(|e: String| anyhow!(e))
}
