//! Unified transaction view
//!
//! Expenses and wage income are stored separately. The analytics core works
//! on a single list of `Transaction`s, assembled here.

use chrono::NaiveDate;

use super::Database;
use crate::error::Result;
use crate::models::{ExpenseFilter, Transaction};
use crate::summary::wage_transactions;

impl Database {
    /// Every expense plus monthly wage income up to the month containing `through`,
    /// sorted by date
    pub fn list_transactions(&self, through: NaiveDate) -> Result<Vec<Transaction>> {
        let wages = self.list_wages()?;
        let expenses = self.list_expenses(&ExpenseFilter::default())?;

        let mut transactions = wage_transactions(&wages, through);
        transactions.extend(expenses.iter().map(|e| e.to_transaction()));
        transactions.sort_by_key(|tx| tx.date);

        tracing::debug!(
            wages = wages.len(),
            expenses = expenses.len(),
            total = transactions.len(),
            "Assembled transactions"
        );
        Ok(transactions)
    }
}
