//! Display category commands

use anyhow::{Context, Result};
use penny_core::db::Database;

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────");

    if categories.is_empty() {
        println!("   No categories. Run 'penny init' to seed the defaults.");
        return Ok(());
    }

    for category in &categories {
        println!(
            "   {:>3}  {:20} {}",
            category.id,
            category.name,
            category.color.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str, color: Option<&str>) -> Result<()> {
    let category = db
        .create_category(name, color)
        .with_context(|| format!("Failed to add category '{}'", name))?;

    println!("✅ Added category '{}' (#{})", category.name, category.id);
    Ok(())
}
