//! Penny Core Library
//!
//! Shared functionality for the Penny personal finance tool:
//! - Database access and migrations (wages, expenses, categories, budgets)
//! - Period calendar for month, quarter and year comparisons
//! - Aggregation engine: totals, savings rate, ranked categories
//! - Budget comparator and spending trend detector
//! - Rule-based insight generator
//! - Configuration loading and CSV export

pub mod budget;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod period;
pub mod summary;
pub mod trend;

pub use budget::{evaluate_budgets, evaluate_budgets_in};
pub use config::{AppConfig, DatabaseConfig, ServerSettings};
pub use db::Database;
pub use error::{Error, Result};
pub use export::{write_transactions_csv, TransactionExportOptions};
pub use insights::{generate_insights, InsightContext, InsightEngine, InsightRule};
pub use period::{period_info, period_info_at, trailing_months};
pub use summary::{
    current_wage, monthly_totals, summarize, wage_summary, wage_transactions, TOP_CATEGORY_LIMIT,
};
pub use trend::{detect_trend, detect_trend_for};
