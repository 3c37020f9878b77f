//! Expense operations

use rusqlite::{params, OptionalExtension};

use super::{parse_date, parse_datetime, Database};
use crate::error::Result;
use crate::models::{ExpenseCategory, ExpenseEntry, ExpenseFilter, NewExpenseEntry};

const EXPENSE_COLUMNS: &str = "id, amount, description, category, date, created_at";

fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<ExpenseEntry> {
    let category: String = row.get(3)?;
    let date: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    Ok(ExpenseEntry {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        category: category.parse().unwrap_or(ExpenseCategory::Other),
        date: parse_date(4, &date)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Record an expense after validating it
    pub fn insert_expense(&self, expense: &NewExpenseEntry) -> Result<ExpenseEntry> {
        expense.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (amount, description, category, date) VALUES (?, ?, ?, ?)",
            params![
                expense.amount,
                expense.description.trim(),
                expense.category.as_str(),
                expense.date.to_string()
            ],
        )?;
        let id = conn.last_insert_rowid();

        let entry = conn.query_row(
            &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS),
            params![id],
            row_to_expense,
        )?;

        tracing::info!(
            id,
            amount = entry.amount,
            category = entry.category.as_str(),
            "Recorded expense"
        );
        Ok(entry)
    }

    /// List expenses, newest first, narrowed by `filter`
    pub fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<ExpenseEntry>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(from) = filter.from {
            conditions.push("date >= ?");
            params.push(Box::new(from.to_string()));
        }
        if let Some(to) = filter.to {
            conditions.push("date <= ?");
            params.push(Box::new(to.to_string()));
        }
        if let Some(category) = filter.category {
            conditions.push("category = ?");
            params.push(Box::new(category.as_str()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit_clause = match filter.limit {
            Some(limit) => {
                params.push(Box::new(limit));
                "LIMIT ?"
            }
            None => "",
        };

        let sql = format!(
            "SELECT {} FROM expenses {} ORDER BY date DESC, id DESC {}",
            EXPENSE_COLUMNS, where_clause, limit_clause
        );

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let expenses = stmt
            .query_map(params_refs.as_slice(), row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    pub fn get_expense(&self, id: i64) -> Result<Option<ExpenseEntry>> {
        let conn = self.conn()?;
        let expense = conn
            .query_row(
                &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS),
                params![id],
                row_to_expense,
            )
            .optional()?;

        Ok(expense)
    }

    /// Delete an expense. Returns false if it did not exist.
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        if deleted > 0 {
            tracing::info!(id, "Deleted expense");
        }
        Ok(deleted > 0)
    }
}
