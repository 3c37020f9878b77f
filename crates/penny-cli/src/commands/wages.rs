//! Wage commands

use anyhow::{Context, Result};
use penny_core::db::Database;
use penny_core::models::NewWageEntry;
use penny_core::summary::wage_summary;

use super::parse_date;

pub fn cmd_wages_list(db: &Database) -> Result<()> {
    let wages = db.list_wages()?;

    println!();
    println!("💼 Wage History");
    println!("   ─────────────────────────────────────────────────────────────");

    if wages.is_empty() {
        println!("   No wages recorded. Add one with: penny wages add --amount <n> --effective-date <date>");
        return Ok(());
    }

    println!("   {:>5} │ {:10} │ {:>10} │ Description", "ID", "Effective", "Monthly");
    println!("   ──────┼────────────┼────────────┼──────────────────");
    for wage in &wages {
        println!(
            "   {:>5} │ {:10} │ {:>10.2} │ {}",
            wage.id,
            wage.effective_date,
            wage.monthly_amount,
            wage.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

pub fn cmd_wages_add(
    db: &Database,
    amount: f64,
    effective_date: &str,
    description: Option<String>,
) -> Result<()> {
    let entry = NewWageEntry {
        monthly_amount: amount,
        effective_date: parse_date(effective_date, "effective-date")?,
        description,
    };

    let wage = db.insert_wage(&entry).context("Failed to record wage")?;

    println!(
        "✅ Recorded wage #{}: {:.2}/month from {}",
        wage.id, wage.monthly_amount, wage.effective_date
    );
    Ok(())
}

pub fn cmd_wages_current(db: &Database) -> Result<()> {
    let wages = db.list_wages()?;
    let summary = wage_summary(&wages);

    println!();
    println!("💼 Current Wage");
    println!("   ─────────────────────────────");

    match &summary.current {
        Some(current) => {
            println!("   Monthly:   {:>10.2}", summary.monthly_amount);
            println!("   Annual:    {:>10.2}", summary.annual_amount);
            println!("   Since:     {}", current.effective_date);
            println!("   Entries:   {}", summary.history_count);
        }
        None => println!("   No wages recorded."),
    }

    Ok(())
}
