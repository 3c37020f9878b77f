//! CSV export command

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use penny_core::db::Database;
use penny_core::export::TransactionExportOptions;

use super::parse_optional_date;

pub fn cmd_export(
    db: &Database,
    output: Option<PathBuf>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let opts = TransactionExportOptions {
        from: parse_optional_date(from, "from")?,
        to: parse_optional_date(to, "to")?,
    };

    let csv = db
        .export_transactions_csv(&opts)
        .context("Failed to export transactions")?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(csv.as_bytes())?;

            let rows = csv.lines().count().saturating_sub(1); // Subtract header
            println!("✅ Exported {} transactions to {}", rows, path.display());
        }
        None => {
            // Write to stdout
            print!("{}", csv);
        }
    }

    Ok(())
}
