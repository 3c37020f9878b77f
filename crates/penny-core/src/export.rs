//! CSV export of income and expense transactions

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::Transaction;

/// Options for transaction export
#[derive(Debug, Clone, Default)]
pub struct TransactionExportOptions {
    /// Start date filter (inclusive)
    pub from: Option<NaiveDate>,
    /// End date filter (inclusive). Wage income is projected up to this date,
    /// or today when unset.
    pub to: Option<NaiveDate>,
}

/// Write transactions as CSV with a `date,type,category,description,amount` header
pub fn write_transactions_csv<W: Write>(writer: W, transactions: &[Transaction]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["date", "type", "category", "description", "amount"])?;

    for tx in transactions {
        csv.write_record([
            tx.date.to_string(),
            tx.transaction_type.to_string(),
            tx.category.clone(),
            tx.description.clone(),
            format!("{:.2}", tx.amount),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

impl Database {
    /// Transactions inside the export window, oldest first
    pub fn export_transactions(&self, opts: &TransactionExportOptions) -> Result<Vec<Transaction>> {
        if let (Some(from), Some(to)) = (opts.from, opts.to) {
            if from > to {
                return Err(Error::InvalidData(format!(
                    "export start {} is after end {}",
                    from, to
                )));
            }
        }

        let through = opts.to.unwrap_or_else(|| Local::now().date_naive());
        let transactions = self
            .list_transactions(through)?
            .into_iter()
            .filter(|tx| opts.from.map_or(true, |from| tx.date >= from))
            .filter(|tx| opts.to.map_or(true, |to| tx.date <= to))
            .collect();

        Ok(transactions)
    }

    /// Export transactions to a CSV string
    pub fn export_transactions_csv(&self, opts: &TransactionExportOptions) -> Result<String> {
        let transactions = self.export_transactions(opts)?;

        let mut buffer = Vec::new();
        write_transactions_csv(&mut buffer, &transactions)?;

        String::from_utf8(buffer).map_err(|e| Error::InvalidData(format!("CSV not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, NewExpenseEntry, NewWageEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_write_csv_quotes_fields() {
        let txs = vec![Transaction::expense(
            12.5,
            date(2024, 6, 15),
            "Food",
            "Tacos, \"extra\" salsa",
        )];

        let mut buffer = Vec::new();
        write_transactions_csv(&mut buffer, &txs).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "date,type,category,description,amount\n\
             2024-06-15,expense,Food,\"Tacos, \"\"extra\"\" salsa\",12.50\n"
        );
    }

    #[test]
    fn test_export_empty() {
        let db = Database::in_memory().unwrap();
        let csv = db
            .export_transactions_csv(&TransactionExportOptions::default())
            .unwrap();
        assert_eq!(csv, "date,type,category,description,amount\n");
    }

    #[test]
    fn test_export_with_date_window() {
        let db = Database::in_memory().unwrap();
        db.insert_wage(&NewWageEntry {
            monthly_amount: 3000.0,
            effective_date: date(2024, 1, 1),
            description: Some("Salary".to_string()),
        })
        .unwrap();
        for day in [5, 15, 25] {
            db.insert_expense(&NewExpenseEntry {
                amount: day as f64,
                description: format!("Day {}", day),
                category: ExpenseCategory::Food,
                date: date(2024, 2, day),
            })
            .unwrap();
        }

        let opts = TransactionExportOptions {
            from: Some(date(2024, 2, 1)),
            to: Some(date(2024, 2, 20)),
        };
        let txs = db.export_transactions(&opts).unwrap();

        assert_eq!(txs.len(), 3);
        assert!(txs[0].is_income());
        assert_eq!(txs[0].date, date(2024, 2, 1));
        assert_eq!(txs[1].description, "Day 5");
        assert_eq!(txs[2].description, "Day 15");

        let csv = db.export_transactions_csv(&opts).unwrap();
        assert!(csv.contains("2024-02-01,income,Wage,Salary,3000.00"));
        assert!(!csv.contains("Day 25"));
    }

    #[test]
    fn test_export_rejects_inverted_window() {
        let db = Database::in_memory().unwrap();
        let opts = TransactionExportOptions {
            from: Some(date(2024, 3, 1)),
            to: Some(date(2024, 2, 1)),
        };
        assert!(db.export_transactions(&opts).is_err());
    }
}
