//! CLI command tests

use chrono::NaiveDate;
use penny_core::db::Database;
use penny_core::models::{ExpenseCategory, ExpenseFilter};

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    let db = Database::in_memory().unwrap();
    db.seed_categories().unwrap();
    db
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// January 2024 with a wage, two expenses and a Food budget
fn setup_january_db() -> Database {
    let db = setup_test_db();
    commands::cmd_wages_add(&db, 1000.0, "2024-01-01", Some("Salary".to_string())).unwrap();
    commands::cmd_expenses_add(&db, 300.0, "Groceries", "Food", Some("2024-01-10"), date(2024, 1, 31))
        .unwrap();
    commands::cmd_expenses_add(&db, 200.0, "Train", "transport", Some("2024-01-12"), date(2024, 1, 31))
        .unwrap();
    commands::cmd_budgets_set(&db, "Food", 400.0).unwrap();
    db
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer description", 10), "a much ...");
    assert_eq!(truncate("café crème brûlée", 8), "café ...");
}

#[test]
fn test_parse_helpers() {
    assert_eq!(
        commands::parse_date("2024-02-29", "from").unwrap(),
        date(2024, 2, 29)
    );
    let err = commands::parse_date("29/02/2024", "from").unwrap_err();
    assert!(err.to_string().contains("--from"));

    assert_eq!(
        commands::parse_category("health").unwrap(),
        ExpenseCategory::Healthcare
    );
    assert!(commands::parse_category("Crypto").is_err());
    assert!(commands::parse_period("week").is_err());
}

// ========== Wage Command Tests ==========

#[test]
fn test_cmd_wages_add_and_list() {
    let db = setup_test_db();

    commands::cmd_wages_add(&db, 4000.0, "2024-01-01", None).unwrap();
    commands::cmd_wages_add(&db, 4400.0, "2024-06-01", Some("Raise".to_string())).unwrap();

    let wages = db.list_wages().unwrap();
    assert_eq!(wages.len(), 2);
    assert_eq!(wages[0].monthly_amount, 4400.0);
    assert_eq!(wages[0].description.as_deref(), Some("Raise"));

    assert!(commands::cmd_wages_list(&db).is_ok());
    assert!(commands::cmd_wages_current(&db).is_ok());
}

#[test]
fn test_cmd_wages_add_rejects_invalid_input() {
    let db = setup_test_db();

    assert!(commands::cmd_wages_add(&db, 0.0, "2024-01-01", None).is_err());
    assert!(commands::cmd_wages_add(&db, 100.0, "January", None).is_err());
    assert!(db.list_wages().unwrap().is_empty());
}

#[test]
fn test_cmd_wages_current_without_history() {
    let db = setup_test_db();
    assert!(commands::cmd_wages_current(&db).is_ok());
}

// ========== Expense Command Tests ==========

#[test]
fn test_cmd_expenses_add_defaults_to_today() {
    let db = setup_test_db();
    let today = date(2024, 3, 15);

    commands::cmd_expenses_add(&db, 12.5, "  Lunch ", "food", None, today).unwrap();

    let expenses = db.list_expenses(&ExpenseFilter::default()).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].date, today);
    assert_eq!(expenses[0].description, "Lunch");
    assert_eq!(expenses[0].category, ExpenseCategory::Food);
}

#[test]
fn test_cmd_expenses_add_rejects_invalid_input() {
    let db = setup_test_db();
    let today = date(2024, 3, 15);

    assert!(commands::cmd_expenses_add(&db, -5.0, "Refund", "Food", None, today).is_err());
    assert!(commands::cmd_expenses_add(&db, 5.0, "", "Food", None, today).is_err());
    assert!(commands::cmd_expenses_add(&db, 5.0, "Coins", "Crypto", None, today).is_err());
    assert!(commands::cmd_expenses_add(&db, 5.0, "Coins", "Other", Some("soon"), today).is_err());

    assert!(db.list_expenses(&ExpenseFilter::default()).unwrap().is_empty());
}

#[test]
fn test_cmd_expenses_list_filters() {
    let db = setup_january_db();

    assert!(commands::cmd_expenses_list(&db, None, None, None, 20).is_ok());
    assert!(commands::cmd_expenses_list(
        &db,
        Some("2024-01-01"),
        Some("2024-01-31"),
        Some("Food"),
        5
    )
    .is_ok());

    assert!(commands::cmd_expenses_list(&db, None, None, None, 0).is_err());
    assert!(commands::cmd_expenses_list(&db, Some("2024-02-01"), Some("2024-01-01"), None, 20).is_err());
    assert!(commands::cmd_expenses_list(&db, None, None, Some("Crypto"), 20).is_err());
}

#[test]
fn test_cmd_expenses_delete() {
    let db = setup_january_db();
    let id = db.list_expenses(&ExpenseFilter::default()).unwrap()[0].id;

    commands::cmd_expenses_delete(&db, id).unwrap();
    assert!(db.get_expense(id).unwrap().is_none());

    let result = commands::cmd_expenses_delete(&db, id);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

// ========== Category Command Tests ==========

#[test]
fn test_cmd_categories() {
    let db = setup_test_db();

    assert!(commands::cmd_categories_list(&db).is_ok());
    commands::cmd_categories_add(&db, "Pets", Some("#123456")).unwrap();

    let pets = db.get_category_by_name("Pets").unwrap().unwrap();
    assert_eq!(pets.color.as_deref(), Some("#123456"));

    assert!(commands::cmd_categories_add(&db, "pets", None).is_err());
    assert!(commands::cmd_categories_add(&db, "  ", None).is_err());
}

// ========== Budget Command Tests ==========

#[test]
fn test_cmd_budgets_set_replace_remove() {
    let db = setup_test_db();

    commands::cmd_budgets_set(&db, "Food", 300.0).unwrap();
    commands::cmd_budgets_set(&db, "food", 350.0).unwrap();

    let budgets = db.list_budgets().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, 350.0);
    assert!(commands::cmd_budgets_list(&db).is_ok());

    assert!(commands::cmd_budgets_set(&db, "Food", 0.0).is_err());
    assert!(commands::cmd_budgets_set(&db, "Crypto", 10.0).is_err());

    commands::cmd_budgets_remove(&db, "Food").unwrap();
    assert!(db.list_budgets().unwrap().is_empty());
    assert!(commands::cmd_budgets_remove(&db, "Food").is_err());
}

// ========== Report Command Tests ==========

#[test]
fn test_resolve_range() {
    let today = date(2024, 5, 20);

    let (range, label) = commands::resolve_range("quarter", None, None, today).unwrap();
    assert_eq!(range.start, date(2024, 4, 1));
    assert_eq!(range.end, date(2024, 6, 30));
    assert_eq!(label, "Q2 2024");

    let (range, _) =
        commands::resolve_range("month", Some("2024-01-05"), Some("2024-01-20"), today).unwrap();
    assert_eq!(range.start, date(2024, 1, 5));
    assert_eq!(range.end, date(2024, 1, 20));

    assert!(commands::resolve_range("month", Some("2024-01-05"), None, today).is_err());
    assert!(commands::resolve_range("month", Some("2024-02-01"), Some("2024-01-01"), today).is_err());
    assert!(commands::resolve_range("fortnight", None, None, today).is_err());
}

#[test]
fn test_cmd_reports_run() {
    let db = setup_january_db();
    let today = date(2024, 1, 31);

    assert!(commands::cmd_report_summary(&db, "month", None, None, today).is_ok());
    assert!(commands::cmd_report_summary(&db, "year", Some("2024-01-01"), Some("2024-01-31"), today).is_ok());
    assert!(commands::cmd_report_budgets(&db, "month", today).is_ok());
    assert!(commands::cmd_report_trend(&db, "month", today).is_ok());
    assert!(commands::cmd_report_insights(&db, "month", today).is_ok());
    assert!(commands::cmd_report_monthly(&db, 3, today).is_ok());
    assert!(commands::cmd_report_overview(&db, "quarter", today).is_ok());

    assert!(commands::cmd_report_monthly(&db, 0, today).is_err());
    assert!(commands::cmd_report_budgets(&db, "decade", today).is_err());
}

#[test]
fn test_reports_on_empty_database() {
    let db = setup_test_db();
    let today = date(2024, 1, 31);

    assert!(commands::cmd_report_summary(&db, "month", None, None, today).is_ok());
    assert!(commands::cmd_report_budgets(&db, "month", today).is_ok());
    assert!(commands::cmd_report_insights(&db, "month", today).is_ok());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_to_file() {
    let db = setup_january_db();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.csv");

    commands::cmd_export(&db, Some(path.clone()), Some("2024-01-01"), Some("2024-01-31")).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,type,category,description,amount");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2024-01-01,income,Wage,Salary,1000.00");
    assert!(content.contains("2024-01-10,expense,Food,Groceries,300.00"));
    assert!(content.contains("2024-01-12,expense,Transportation,Train,200.00"));
}

#[test]
fn test_cmd_export_rejects_inverted_range() {
    let db = setup_january_db();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let result = commands::cmd_export(&db, Some(path.clone()), Some("2024-02-01"), Some("2024-01-01"));
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_open_db_unencrypted_and_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penny.db");

    commands::cmd_init(&path, true).unwrap();
    // Second init is a no-op
    commands::cmd_init(&path, true).unwrap();

    let db = commands::open_db(&path, true).unwrap();
    assert_eq!(db.list_categories().unwrap().len(), ExpenseCategory::all().len());
}
