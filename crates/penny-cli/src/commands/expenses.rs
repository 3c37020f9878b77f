//! Expense commands (list, add, delete)

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use penny_core::db::Database;
use penny_core::models::{ExpenseFilter, NewExpenseEntry};

use super::{parse_category, parse_optional_date, truncate};

pub fn cmd_expenses_list(
    db: &Database,
    from: Option<&str>,
    to: Option<&str>,
    category: Option<&str>,
    limit: i64,
) -> Result<()> {
    if limit < 1 {
        bail!("--limit must be at least 1");
    }

    let filter = ExpenseFilter {
        from: parse_optional_date(from, "from")?,
        to: parse_optional_date(to, "to")?,
        category: category.map(parse_category).transpose()?,
        limit: Some(limit),
    };
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            bail!("--from {} is after --to {}", from, to);
        }
    }
    let expenses = db.list_expenses(&filter)?;

    println!();
    println!("🧾 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    if expenses.is_empty() {
        println!("   No expenses found.");
        return Ok(());
    }

    println!(
        "   {:>5} │ {:10} │ {:14} │ {:>10} │ Description",
        "ID", "Date", "Category", "Amount"
    );
    println!("   ──────┼────────────┼────────────────┼────────────┼──────────────────");
    for expense in &expenses {
        println!(
            "   {:>5} │ {:10} │ {:14} │ {:>10.2} │ {}",
            expense.id,
            expense.date,
            expense.category.as_str(),
            expense.amount,
            truncate(&expense.description, 40)
        );
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    println!("   ──────┼────────────┼────────────────┼────────────┼──────────────────");
    println!("   {:>5} │ {:10} │ {:14} │ {:>10.2} │", "", "", "Total", total);

    Ok(())
}

pub fn cmd_expenses_add(
    db: &Database,
    amount: f64,
    description: &str,
    category: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let entry = NewExpenseEntry {
        amount,
        description: description.to_string(),
        category: parse_category(category)?,
        date: parse_optional_date(date, "date")?.unwrap_or(today),
    };

    let expense = db.insert_expense(&entry).context("Failed to record expense")?;

    println!(
        "✅ Recorded expense #{}: {:.2} {} on {} ({})",
        expense.id,
        expense.amount,
        expense.category.as_str(),
        expense.date,
        expense.description
    );
    Ok(())
}

pub fn cmd_expenses_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_expense(id)? {
        bail!("Expense {} not found", id);
    }

    println!("🗑️  Deleted expense #{}", id);
    Ok(())
}
