//! Wage history operations

use rusqlite::{params, OptionalExtension};

use super::{parse_date, parse_datetime, Database};
use crate::error::Result;
use crate::models::{NewWageEntry, WageEntry};

const WAGE_COLUMNS: &str = "id, monthly_amount, effective_date, description, created_at";

fn row_to_wage(row: &rusqlite::Row) -> rusqlite::Result<WageEntry> {
    let effective_date: String = row.get(2)?;
    let created_at: String = row.get(4)?;
    Ok(WageEntry {
        id: row.get(0)?,
        monthly_amount: row.get(1)?,
        effective_date: parse_date(2, &effective_date)?,
        description: row.get(3)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Record a wage entry after validating it
    pub fn insert_wage(&self, wage: &NewWageEntry) -> Result<WageEntry> {
        wage.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO wages (monthly_amount, effective_date, description) VALUES (?, ?, ?)",
            params![
                wage.monthly_amount,
                wage.effective_date.to_string(),
                wage.normalized_description()
            ],
        )?;
        let id = conn.last_insert_rowid();

        let entry = conn.query_row(
            &format!("SELECT {} FROM wages WHERE id = ?", WAGE_COLUMNS),
            params![id],
            row_to_wage,
        )?;

        tracing::info!(
            id,
            monthly_amount = entry.monthly_amount,
            effective_date = %entry.effective_date,
            "Recorded wage"
        );
        Ok(entry)
    }

    /// Wage history, most recent first
    pub fn list_wages(&self) -> Result<Vec<WageEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM wages ORDER BY effective_date DESC, created_at DESC, id DESC",
            WAGE_COLUMNS
        ))?;

        let wages = stmt
            .query_map([], row_to_wage)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(wages)
    }

    /// The wage currently in force, if any
    pub fn get_current_wage(&self) -> Result<Option<WageEntry>> {
        let conn = self.conn()?;
        let wage = conn
            .query_row(
                &format!(
                    "SELECT {} FROM wages ORDER BY effective_date DESC, created_at DESC, id DESC LIMIT 1",
                    WAGE_COLUMNS
                ),
                [],
                row_to_wage,
            )
            .optional()?;

        Ok(wage)
    }

    pub fn get_wage(&self, id: i64) -> Result<Option<WageEntry>> {
        let conn = self.conn()?;
        let wage = conn
            .query_row(
                &format!("SELECT {} FROM wages WHERE id = ?", WAGE_COLUMNS),
                params![id],
                row_to_wage,
            )
            .optional()?;

        Ok(wage)
    }
}
