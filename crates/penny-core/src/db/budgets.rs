//! Budget operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Budget, ExpenseCategory};

fn row_to_budget(row: &rusqlite::Row) -> rusqlite::Result<Budget> {
    let category: String = row.get(1)?;
    let created_at: String = row.get(3)?;
    Ok(Budget {
        id: row.get(0)?,
        category: category.parse().unwrap_or(ExpenseCategory::Other),
        amount: row.get(2)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Create the budget for `category`, or replace its amount if one exists
    pub fn upsert_budget(&self, category: ExpenseCategory, amount: f64) -> Result<Budget> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::Validation(
                "amount must be a positive number".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO budgets (category, amount) VALUES (?, ?)
             ON CONFLICT(category) DO UPDATE SET amount = excluded.amount",
            params![category.as_str(), amount],
        )?;

        let budget = conn.query_row(
            "SELECT id, category, amount, created_at FROM budgets WHERE category = ?",
            params![category.as_str()],
            row_to_budget,
        )?;

        tracing::info!(category = category.as_str(), amount, "Saved budget");
        Ok(budget)
    }

    /// All budgets in creation order
    pub fn list_budgets(&self) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, category, amount, created_at FROM budgets ORDER BY id")?;

        let budgets = stmt
            .query_map([], row_to_budget)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(budgets)
    }

    /// Delete a budget by id. Returns false if it did not exist.
    pub fn delete_budget(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM budgets WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }

    /// Delete the budget for a category. Returns false if there was none.
    pub fn delete_budget_for_category(&self, category: ExpenseCategory) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM budgets WHERE category = ?",
            params![category.as_str()],
        )?;
        Ok(deleted > 0)
    }
}
