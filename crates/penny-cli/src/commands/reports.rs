//! Report command implementations

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use penny_core::db::Database;
use penny_core::insights::generate_insights;
use penny_core::models::{BudgetStatus, DateRange, PeriodInfo, TrendDirection};
use penny_core::period::period_info_at;

use super::{parse_optional_date, parse_period, truncate};

/// Resolve a period name to its current and previous ranges
pub fn resolve_period(period: &str, today: NaiveDate) -> Result<PeriodInfo> {
    Ok(period_info_at(parse_period(period)?, today))
}

/// Custom --from/--to range, or the current range of `period`
pub fn resolve_range(
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<(DateRange, String)> {
    let from = parse_optional_date(from, "from")?;
    let to = parse_optional_date(to, "to")?;

    match (from, to) {
        (Some(from), Some(to)) => {
            let range = DateRange::new(from, to).context("Invalid date range")?;
            Ok((range, format!("{} to {}", from, to)))
        }
        (None, None) => {
            let info = resolve_period(period, today)?;
            Ok((info.current, info.label))
        }
        _ => bail!("--from and --to must be given together"),
    }
}

pub fn cmd_report_summary(
    db: &Database,
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let (range, label) = resolve_range(period, from, to, today)?;
    let summary = db.summary_report(&range, today)?;

    println!();
    println!("📊 Financial Summary");
    println!("   Period: {} ({} to {})", label, range.start, range.end);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:        {:>10.2}", summary.total_income);
    println!("   Expenses:      {:>10.2}", summary.total_expenses);
    println!("   Net savings:   {:>10.2}", summary.net_savings);
    println!("   Savings rate:  {:>9.1}%", summary.savings_rate);

    if summary.top_categories.is_empty() {
        println!();
        println!("   No spending found in this period.");
        return Ok(());
    }

    println!();
    println!("   {:20} │ {:>10} │ {:>6}", "Category", "Amount", "%");
    println!("   ─────────────────────┼────────────┼────────");
    for cat in &summary.top_categories {
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}%",
            truncate(&cat.category, 20),
            cat.amount,
            cat.percentage
        );
    }

    Ok(())
}

pub fn cmd_report_budgets(db: &Database, period: &str, today: NaiveDate) -> Result<()> {
    let info = resolve_period(period, today)?;
    let results = db.budget_report(&info, today)?;

    println!();
    println!("🎯 Budgets ({})", info.label);
    println!("   ─────────────────────────────────────────────────────────────");

    if results.is_empty() {
        println!("   No budgets set. Add one with: penny budgets set <category> <amount>");
        return Ok(());
    }

    println!(
        "   {:16} │ {:>10} │ {:>10} │ {:>7} │ Status",
        "Category", "Budget", "Spent", "Used"
    );
    println!("   ─────────────────┼────────────┼────────────┼─────────┼─────────");
    for result in &results {
        let marker = match result.status {
            BudgetStatus::Over => "🔴",
            BudgetStatus::OnTrack => "🟡",
            BudgetStatus::Under => "🟢",
        };
        println!(
            "   {:16} │ {:>10.2} │ {:>10.2} │ {:>6.1}% │ {} {}",
            result.category.as_str(),
            result.budget_amount,
            result.spent_amount,
            result.percent_used,
            marker,
            result.status.as_str()
        );
    }

    Ok(())
}

pub fn cmd_report_trend(db: &Database, period: &str, today: NaiveDate) -> Result<()> {
    let info = resolve_period(period, today)?;
    let trend = db.trend_report(&info, today)?;

    let arrow = match trend.trending {
        TrendDirection::Up => "📈",
        TrendDirection::Down => "📉",
        TrendDirection::Stable => "➡️ ",
    };

    println!();
    println!("{} Spending Trend ({})", arrow, info.label);
    println!("   ─────────────────────────────");
    println!(
        "   Previous ({} to {}): {:>10.2}",
        info.previous.start, info.previous.end, trend.previous
    );
    println!(
        "   Current  ({} to {}): {:>10.2}",
        info.current.start, info.current.end, trend.current
    );
    println!(
        "   Change: {:+.1}% ({})",
        trend.change_percent,
        trend.trending.as_str()
    );

    Ok(())
}

pub fn cmd_report_insights(db: &Database, period: &str, today: NaiveDate) -> Result<()> {
    let info = resolve_period(period, today)?;

    let summary = db.summary_report(&info.current, today)?;
    let budgets = db.budget_report(&info, today)?;
    let trend = db.trend_report(&info, today)?;
    let insights = generate_insights(&summary, &budgets, &trend);

    println!();
    println!("💡 Insights ({})", info.label);
    println!("   ─────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing stands out this period.");
        return Ok(());
    }

    for insight in &insights {
        println!("   • {}", insight);
    }

    Ok(())
}

pub fn cmd_report_monthly(db: &Database, months: u32, today: NaiveDate) -> Result<()> {
    if months == 0 {
        bail!("--months must be at least 1");
    }

    let series = db.monthly_report(today, months)?;

    println!();
    println!("📅 Monthly Totals");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:8} │ {:>10} │ {:>10} │ {:>10}",
        "Month", "Income", "Expenses", "Net"
    );
    println!("   ─────────┼────────────┼────────────┼────────────");

    for month in &series {
        println!(
            "   {:8} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
            month.month, month.income, month.expenses, month.net
        );
    }

    let income: f64 = series.iter().map(|m| m.income).sum();
    let expenses: f64 = series.iter().map(|m| m.expenses).sum();
    println!("   ─────────┼────────────┼────────────┼────────────");
    println!(
        "   {:8} │ {:>10.2} │ {:>10.2} │ {:>10.2}",
        "Total",
        income,
        expenses,
        income - expenses
    );

    Ok(())
}

pub fn cmd_report_overview(db: &Database, period: &str, today: NaiveDate) -> Result<()> {
    let overview = db.overview(parse_period(period)?, today)?;
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
