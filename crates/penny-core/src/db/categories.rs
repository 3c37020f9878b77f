//! Category operations

use rusqlite::{params, OptionalExtension};

use super::{is_constraint_violation, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Category, ExpenseCategory};

fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    let created_at: String = row.get(3)?;
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Insert the built-in expense categories if missing
    ///
    /// Returns the number of categories added.
    pub fn seed_categories(&self) -> Result<usize> {
        let conn = self.conn()?;
        let mut added = 0;

        for category in ExpenseCategory::all() {
            added += conn.execute(
                "INSERT OR IGNORE INTO categories (name, color) VALUES (?, ?)",
                params![category.as_str(), category.default_color()],
            )?;
        }

        if added > 0 {
            tracing::info!(count = added, "Seeded categories");
        }
        Ok(added)
    }

    /// List all categories by name
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, color, created_at FROM categories ORDER BY name")?;

        let categories = stmt
            .query_map([], row_to_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Look up a category by name (case-insensitive)
    pub fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, name, color, created_at FROM categories WHERE name = ?",
                params![name.trim()],
                row_to_category,
            )
            .optional()?;

        Ok(category)
    }

    /// Create a category, failing with `Error::Conflict` if the name is taken
    pub fn create_category(&self, name: &str, color: Option<&str>) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }

        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO categories (name, color) VALUES (?, ?)",
            params![name, color],
        );

        match inserted {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::Conflict(format!(
                    "Category '{}' already exists",
                    name
                )));
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        let category = conn.query_row(
            "SELECT id, name, color, created_at FROM categories WHERE id = ?",
            params![id],
            row_to_category,
        )?;

        tracing::info!(id, name, "Created category");
        Ok(category)
    }
}
