//! CLI argument definitions using clap
//!
//! The command implementations live in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Penny - Track wages, expenses and budgets
#[derive(Parser)]
#[command(name = "penny")]
#[command(about = "Self-hosted personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the configured path, then penny.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to <data dir>/penny/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set PENNY_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default categories
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Directory containing static files to serve (e.g., web/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Manage wage history (list, add, current)
    Wages {
        #[command(subcommand)]
        action: Option<WagesAction>,
    },

    /// Manage expenses (list, add, delete)
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Manage display categories (list, add)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Manage per-category budgets (list, set, remove)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Generate financial reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Export transactions to CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WagesAction {
    /// List wage history, most recent first
    List,

    /// Record a monthly wage
    Add {
        /// Monthly amount
        #[arg(long)]
        amount: f64,

        /// First day the wage applies (YYYY-MM-DD)
        #[arg(long)]
        effective_date: String,

        /// Optional note (e.g., "Raise")
        #[arg(long)]
        description: Option<String>,
    },

    /// Show the current wage and its annual projection
    Current,
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List expenses, newest first
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only this category
        #[arg(long)]
        category: Option<String>,

        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Record an expense
    Add {
        /// Amount spent
        #[arg(long)]
        amount: f64,

        /// What it was for
        #[arg(long)]
        description: String,

        /// Category: Food, Transportation, Housing, Utilities, Entertainment,
        /// Healthcare, Shopping, Education, Other
        #[arg(long)]
        category: String,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories
    List,

    /// Add a display category
    Add {
        /// Category name
        name: String,

        /// Display color (e.g., "#3b82f6")
        #[arg(long)]
        color: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets
    List,

    /// Set the monthly budget for a category
    Set {
        /// Expense category
        category: String,

        /// Budget amount per period
        amount: f64,
    },

    /// Remove the budget for a category
    Remove {
        /// Expense category
        category: String,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Income, expenses, savings rate and top categories
    Summary {
        /// Period: month, quarter, year
        #[arg(long, default_value = "month")]
        period: String,

        /// Custom start date (YYYY-MM-DD) - requires --to, overrides period
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD) - requires --from, overrides period
        #[arg(long)]
        to: Option<String>,
    },

    /// Budget usage for the current period
    Budgets {
        /// Period: month, quarter, year
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// Spending compared with the previous period
    Trend {
        /// Period: month, quarter, year
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// Insight messages for the current period
    Insights {
        /// Period: month, quarter, year
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// Income and expenses per month
    Monthly {
        /// Number of months, ending with the current one
        #[arg(long, default_value = "12")]
        months: u32,
    },

    /// Full overview as JSON
    Overview {
        /// Period: month, quarter, year
        #[arg(long, default_value = "month")]
        period: String,
    },
}
