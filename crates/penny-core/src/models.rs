//! Domain models for Penny

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a wage or expense description (after trimming)
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Category label used for income transactions derived from wage entries
pub const WAGE_CATEGORY: &str = "Wage";

/// Direction of a financial movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial movement as seen by the aggregation components.
///
/// Never persisted directly: built from wage entries (income) and
/// expense entries (expense).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
}

impl Transaction {
    pub fn income(amount: f64, date: NaiveDate, category: &str, description: &str) -> Self {
        Self {
            amount,
            transaction_type: TransactionType::Income,
            date,
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    pub fn expense(amount: f64, date: NaiveDate, category: &str, description: &str) -> Self {
        Self {
            amount,
            transaction_type: TransactionType::Expense,
            date,
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

/// The fixed set of expense categories accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Default display color used when seeding categories
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Food => "#ef4444",
            Self::Transportation => "#f97316",
            Self::Housing => "#eab308",
            Self::Utilities => "#22c55e",
            Self::Entertainment => "#06b6d4",
            Self::Healthcare => "#3b82f6",
            Self::Shopping => "#8b5cf6",
            Self::Education => "#ec4899",
            Self::Other => "#6b7280",
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transportation" | "transport" => Ok(Self::Transportation),
            "housing" => Ok(Self::Housing),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "healthcare" | "health" => Ok(Self::Healthcare),
            "shopping" => Ok(Self::Shopping),
            "education" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded monthly wage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageEntry {
    pub id: i64,
    pub monthly_amount: f64,
    pub effective_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New wage entry for creation (before DB insertion)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWageEntry {
    pub monthly_amount: f64,
    pub effective_date: NaiveDate,
    pub description: Option<String>,
}

impl NewWageEntry {
    /// Check the payload against the server-side rules
    pub fn validate(&self) -> Result<()> {
        validate_amount("monthly_amount", self.monthly_amount)?;
        if let Some(description) = &self.description {
            if description.trim().chars().count() > MAX_DESCRIPTION_LEN {
                return Err(Error::Validation(format!(
                    "description must be at most {} characters",
                    MAX_DESCRIPTION_LEN
                )));
            }
        }
        Ok(())
    }

    /// Trimmed description, with blank descriptions collapsed to `None`
    pub fn normalized_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    pub fn to_transaction(&self) -> Transaction {
        Transaction::expense(
            self.amount,
            self.date,
            self.category.as_str(),
            &self.description,
        )
    }
}

/// New expense for creation (before DB insertion)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpenseEntry {
    pub amount: f64,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl NewExpenseEntry {
    /// Check the payload against the server-side rules
    pub fn validate(&self) -> Result<()> {
        validate_amount("amount", self.amount)?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::Validation("description is required".to_string()));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(Error::Validation(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(())
    }
}

fn validate_amount(field: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(format!(
            "{} must be a positive number",
            field
        )));
    }
    Ok(())
}

/// Display category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Spending limit for one expense category over a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Filters for listing expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
    pub limit: Option<i64>,
}

// ========== Periods ==========

/// Inclusive calendar date interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidData(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// True when `date` falls inside the range, both endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Calendar granularity for period comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[default]
    Month,
    Quarter,
    Year,
}

impl PeriodUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl std::str::FromStr for PeriodUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(format!(
                "Unknown period: {}. Available: month, quarter, year",
                s
            )),
        }
    }
}

impl std::fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current and previous interval for a period unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub current: DateRange,
    pub previous: DateRange,
    pub label: String,
}

// ========== Derived reports ==========

/// Spending total for one category within a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Totals and savings for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    pub savings_rate: f64,
    pub top_categories: Vec<CategoryTotal>,
}

/// Outcome of comparing spending against a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    #[serde(rename = "ontrack")]
    OnTrack,
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under => "under",
            Self::OnTrack => "ontrack",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub budget_id: i64,
    pub category: ExpenseCategory,
    pub budget_amount: f64,
    pub spent_amount: f64,
    pub percent_used: f64,
    pub status: BudgetStatus,
}

/// Direction of spending between two consecutive periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingTrend {
    pub current: f64,
    pub previous: f64,
    pub change_percent: f64,
    pub trending: TrendDirection,
}

/// Current wage with its annual projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageSummary {
    pub current: Option<WageEntry>,
    pub monthly_amount: f64,
    pub annual_amount: f64,
    pub history_count: usize,
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month key formatted as YYYY-MM
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Everything the dashboard shows for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overview {
    pub period: PeriodInfo,
    pub summary: FinancialSummary,
    pub budgets: Vec<BudgetResult>,
    pub trend: SpendingTrend,
    pub insights: Vec<String>,
    pub wage: WageSummary,
}
