//! Budget commands (list, set, remove)

use anyhow::{bail, Context, Result};
use penny_core::db::Database;

use super::parse_category;

pub fn cmd_budgets_list(db: &Database) -> Result<()> {
    let budgets = db.list_budgets()?;

    println!();
    println!("🎯 Budgets");
    println!("   ─────────────────────────────");

    if budgets.is_empty() {
        println!("   No budgets set. Add one with: penny budgets set <category> <amount>");
        return Ok(());
    }

    for budget in &budgets {
        println!("   {:16} {:>10.2}", budget.category.as_str(), budget.amount);
    }

    Ok(())
}

pub fn cmd_budgets_set(db: &Database, category: &str, amount: f64) -> Result<()> {
    let category = parse_category(category)?;
    let budget = db
        .upsert_budget(category, amount)
        .with_context(|| format!("Failed to set budget for {}", category))?;

    println!(
        "✅ Budget for {} set to {:.2}",
        budget.category.as_str(),
        budget.amount
    );
    Ok(())
}

pub fn cmd_budgets_remove(db: &Database, category: &str) -> Result<()> {
    let category = parse_category(category)?;
    if !db.delete_budget_for_category(category)? {
        bail!("No budget set for {}", category);
    }

    println!("🗑️  Removed budget for {}", category);
    Ok(())
}
