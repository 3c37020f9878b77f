//! Penny CLI - Personal finance tracker
//!
//! Usage:
//!   penny init                                  Initialize database
//!   penny wages add --amount 4000 --effective-date 2024-01-01
//!   penny expenses add --amount 12.5 --description Lunch --category Food
//!   penny report summary --period month         Show this month's summary
//!   penny serve --port 3000                     Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use penny_core::config::AppConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let db_path = cli.db.clone().unwrap_or_else(|| config.database.path.clone());
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path, cli.no_encrypt),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let mut settings = config.server.clone();
            if let Some(port) = port {
                settings.port = port;
            }
            if let Some(host) = host {
                settings.host = host;
            }
            if static_dir.is_some() {
                settings.static_dir = static_dir;
            }
            commands::cmd_serve(&db_path, &settings, cli.no_encrypt).await
        }
        Commands::Wages { action } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            match action {
                None | Some(WagesAction::List) => commands::cmd_wages_list(&db),
                Some(WagesAction::Add {
                    amount,
                    effective_date,
                    description,
                }) => commands::cmd_wages_add(&db, amount, &effective_date, description),
                Some(WagesAction::Current) => commands::cmd_wages_current(&db),
            }
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            match action {
                None => commands::cmd_expenses_list(&db, None, None, None, 20),
                Some(ExpensesAction::List {
                    from,
                    to,
                    category,
                    limit,
                }) => commands::cmd_expenses_list(
                    &db,
                    from.as_deref(),
                    to.as_deref(),
                    category.as_deref(),
                    limit,
                ),
                Some(ExpensesAction::Add {
                    amount,
                    description,
                    category,
                    date,
                }) => commands::cmd_expenses_add(
                    &db,
                    amount,
                    &description,
                    &category,
                    date.as_deref(),
                    today,
                ),
                Some(ExpensesAction::Delete { id }) => commands::cmd_expenses_delete(&db, id),
            }
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            match action {
                None | Some(CategoriesAction::List) => commands::cmd_categories_list(&db),
                Some(CategoriesAction::Add { name, color }) => {
                    commands::cmd_categories_add(&db, &name, color.as_deref())
                }
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            match action {
                None | Some(BudgetsAction::List) => commands::cmd_budgets_list(&db),
                Some(BudgetsAction::Set { category, amount }) => {
                    commands::cmd_budgets_set(&db, &category, amount)
                }
                Some(BudgetsAction::Remove { category }) => {
                    commands::cmd_budgets_remove(&db, &category)
                }
            }
        }
        Commands::Report { report_type } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            match report_type {
                ReportType::Summary { period, from, to } => commands::cmd_report_summary(
                    &db,
                    &period,
                    from.as_deref(),
                    to.as_deref(),
                    today,
                ),
                ReportType::Budgets { period } => {
                    commands::cmd_report_budgets(&db, &period, today)
                }
                ReportType::Trend { period } => commands::cmd_report_trend(&db, &period, today),
                ReportType::Insights { period } => {
                    commands::cmd_report_insights(&db, &period, today)
                }
                ReportType::Monthly { months } => {
                    commands::cmd_report_monthly(&db, months, today)
                }
                ReportType::Overview { period } => {
                    commands::cmd_report_overview(&db, &period, today)
                }
            }
        }
        Commands::Export { output, from, to } => {
            let db = commands::open_db(&db_path, cli.no_encrypt)?;
            commands::cmd_export(&db, output, from.as_deref(), to.as_deref())
        }
    }
}
