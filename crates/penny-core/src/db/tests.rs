//! Database tests

use chrono::NaiveDate;

use super::*;
use crate::error::Error;
use crate::models::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_expense(amount: f64, category: ExpenseCategory, day: NaiveDate) -> NewExpenseEntry {
    NewExpenseEntry {
        amount,
        description: format!("{} on {}", category, day),
        category,
        date: day,
    }
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_categories().unwrap().is_empty());
    assert!(db.list_wages().unwrap().is_empty());
    assert!(db.get_current_wage().unwrap().is_none());
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::in_memory().unwrap();
    db.insert_expense(&new_expense(10.0, ExpenseCategory::Food, date(2024, 1, 1)))
        .unwrap();

    let reopened = Database::new_unencrypted(db.path()).unwrap();
    assert_eq!(
        reopened
            .list_expenses(&ExpenseFilter::default())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_encrypted_db_requires_matching_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encrypted.db");
    let path = path.to_str().unwrap();

    let db = Database::new_with_key(path, Some("correct horse")).unwrap();
    db.insert_expense(&new_expense(42.0, ExpenseCategory::Other, date(2024, 1, 1)))
        .unwrap();
    drop(db);

    let reopened = Database::new_with_key(path, Some("correct horse")).unwrap();
    assert_eq!(
        reopened
            .list_expenses(&ExpenseFilter::default())
            .unwrap()
            .len(),
        1
    );
    drop(reopened);

    assert!(Database::new_with_key(path, Some("wrong key")).is_err());
    assert!(Database::new_unencrypted(path).is_err());
}

#[test]
fn test_derive_key_is_stable() {
    let a = derive_key("correct horse").unwrap();
    let b = derive_key("correct horse").unwrap();
    let c = derive_key("battery staple").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
}

#[test]
fn test_seed_categories() {
    let db = Database::in_memory().unwrap();

    let added = db.seed_categories().unwrap();
    assert_eq!(added, ExpenseCategory::all().len());

    // Seeding again adds nothing
    assert_eq!(db.seed_categories().unwrap(), 0);

    let food = db.get_category_by_name("food").unwrap().unwrap();
    assert_eq!(food.name, "Food");
    assert_eq!(food.color.as_deref(), Some("#ef4444"));
}

#[test]
fn test_create_category_conflict() {
    let db = Database::in_memory().unwrap();

    let pets = db.create_category("Pets", Some("#123456")).unwrap();
    assert_eq!(pets.name, "Pets");

    let duplicate = db.create_category("pets", None);
    assert!(matches!(duplicate, Err(Error::Conflict(_))));

    let blank = db.create_category("   ", None);
    assert!(matches!(blank, Err(Error::Validation(_))));

    assert_eq!(db.list_categories().unwrap().len(), 1);
}

#[test]
fn test_wage_history_and_current() {
    let db = Database::in_memory().unwrap();

    let first = db
        .insert_wage(&NewWageEntry {
            monthly_amount: 3000.0,
            effective_date: date(2023, 6, 1),
            description: Some("  Starting salary ".to_string()),
        })
        .unwrap();
    assert_eq!(first.description.as_deref(), Some("Starting salary"));

    let raise = db
        .insert_wage(&NewWageEntry {
            monthly_amount: 3600.0,
            effective_date: date(2024, 1, 1),
            description: None,
        })
        .unwrap();

    // Back-dated correction entered later
    db.insert_wage(&NewWageEntry {
        monthly_amount: 3100.0,
        effective_date: date(2023, 9, 1),
        description: None,
    })
    .unwrap();

    let history = db.list_wages().unwrap();
    let dates: Vec<NaiveDate> = history.iter().map(|w| w.effective_date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2023, 9, 1), date(2023, 6, 1)]
    );

    let current = db.get_current_wage().unwrap().unwrap();
    assert_eq!(current.id, raise.id);
    assert_eq!(db.get_wage(first.id).unwrap().unwrap().monthly_amount, 3000.0);
    assert!(db.get_wage(9999).unwrap().is_none());
}

#[test]
fn test_same_day_wages_latest_insert_wins() {
    let db = Database::in_memory().unwrap();
    for amount in [3000.0, 3200.0] {
        db.insert_wage(&NewWageEntry {
            monthly_amount: amount,
            effective_date: date(2024, 1, 1),
            description: None,
        })
        .unwrap();
    }
    let current = db.get_current_wage().unwrap().unwrap();
    assert_eq!(current.monthly_amount, 3200.0);
}

#[test]
fn test_invalid_wage_is_not_persisted() {
    let db = Database::in_memory().unwrap();
    let result = db.insert_wage(&NewWageEntry {
        monthly_amount: 0.0,
        effective_date: date(2024, 1, 1),
        description: None,
    });
    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(db.list_wages().unwrap().is_empty());
}

#[test]
fn test_expense_crud() {
    let db = Database::in_memory().unwrap();

    let created = db
        .insert_expense(&NewExpenseEntry {
            amount: 42.5,
            description: "  Weekly groceries ".to_string(),
            category: ExpenseCategory::Food,
            date: date(2024, 3, 9),
        })
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.description, "Weekly groceries");
    assert_eq!(created.category, ExpenseCategory::Food);

    let fetched = db.get_expense(created.id).unwrap().unwrap();
    assert_eq!(fetched.amount, 42.5);
    assert_eq!(fetched.date, date(2024, 3, 9));

    assert!(db.delete_expense(created.id).unwrap());
    assert!(!db.delete_expense(created.id).unwrap());
    assert!(db.get_expense(created.id).unwrap().is_none());
}

#[test]
fn test_invalid_expense_is_not_persisted() {
    let db = Database::in_memory().unwrap();
    let result = db.insert_expense(&NewExpenseEntry {
        amount: 10.0,
        description: "".to_string(),
        category: ExpenseCategory::Other,
        date: date(2024, 1, 1),
    });
    assert!(result.is_err());
    assert!(db
        .list_expenses(&ExpenseFilter::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_list_expenses_filters() {
    let db = Database::in_memory().unwrap();
    db.insert_expense(&new_expense(10.0, ExpenseCategory::Food, date(2024, 1, 5)))
        .unwrap();
    db.insert_expense(&new_expense(20.0, ExpenseCategory::Housing, date(2024, 1, 20)))
        .unwrap();
    db.insert_expense(&new_expense(30.0, ExpenseCategory::Food, date(2024, 2, 2)))
        .unwrap();

    let all = db.list_expenses(&ExpenseFilter::default()).unwrap();
    let amounts: Vec<f64> = all.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![30.0, 20.0, 10.0]);

    let january = db
        .list_expenses(&ExpenseFilter {
            from: Some(date(2024, 1, 1)),
            to: Some(date(2024, 1, 31)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(january.len(), 2);

    let food = db
        .list_expenses(&ExpenseFilter {
            category: Some(ExpenseCategory::Food),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(food.len(), 2);
    assert!(food.iter().all(|e| e.category == ExpenseCategory::Food));

    let limited = db
        .list_expenses(&ExpenseFilter {
            limit: Some(1),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].amount, 30.0);
}

#[test]
fn test_budget_upsert() {
    let db = Database::in_memory().unwrap();

    let food = db.upsert_budget(ExpenseCategory::Food, 400.0).unwrap();
    db.upsert_budget(ExpenseCategory::Housing, 1200.0).unwrap();
    let updated = db.upsert_budget(ExpenseCategory::Food, 450.0).unwrap();

    assert_eq!(updated.id, food.id);
    assert_eq!(updated.amount, 450.0);

    let budgets = db.list_budgets().unwrap();
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0].category, ExpenseCategory::Food);

    assert!(matches!(
        db.upsert_budget(ExpenseCategory::Food, -5.0),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_budget_delete() {
    let db = Database::in_memory().unwrap();
    let food = db.upsert_budget(ExpenseCategory::Food, 400.0).unwrap();
    db.upsert_budget(ExpenseCategory::Shopping, 100.0).unwrap();

    assert!(db.delete_budget(food.id).unwrap());
    assert!(!db.delete_budget(food.id).unwrap());
    assert!(db
        .delete_budget_for_category(ExpenseCategory::Shopping)
        .unwrap());
    assert!(db.list_budgets().unwrap().is_empty());
}

#[test]
fn test_list_transactions_merges_wages_and_expenses() {
    let db = Database::in_memory().unwrap();
    db.insert_wage(&NewWageEntry {
        monthly_amount: 2500.0,
        effective_date: date(2024, 1, 1),
        description: None,
    })
    .unwrap();
    db.insert_expense(&new_expense(80.0, ExpenseCategory::Utilities, date(2024, 1, 15)))
        .unwrap();

    let txs = db.list_transactions(date(2024, 2, 10)).unwrap();

    assert_eq!(txs.len(), 3);
    assert!(txs[0].is_income());
    assert_eq!(txs[0].date, date(2024, 1, 1));
    assert!(txs[1].is_expense());
    assert_eq!(txs[1].category, "Utilities");
    assert_eq!(txs[2].date, date(2024, 2, 1));
    assert_eq!(txs[2].category, WAGE_CATEGORY);
}

#[test]
fn test_overview_for_month() {
    let db = Database::in_memory().unwrap();
    db.insert_wage(&NewWageEntry {
        monthly_amount: 1000.0,
        effective_date: date(2024, 1, 1),
        description: None,
    })
    .unwrap();
    db.insert_expense(&new_expense(300.0, ExpenseCategory::Food, date(2024, 1, 10)))
        .unwrap();
    db.insert_expense(&new_expense(200.0, ExpenseCategory::Transportation, date(2024, 1, 15)))
        .unwrap();
    db.upsert_budget(ExpenseCategory::Food, 250.0).unwrap();

    let overview = db.overview(PeriodUnit::Month, date(2024, 1, 20)).unwrap();

    assert_eq!(overview.period.label, "January 2024");
    assert_eq!(overview.summary.total_income, 1000.0);
    assert_eq!(overview.summary.total_expenses, 500.0);
    assert_eq!(overview.summary.savings_rate, 50.0);
    assert_eq!(overview.budgets.len(), 1);
    assert_eq!(overview.budgets[0].status, BudgetStatus::Over);
    assert_eq!(overview.trend.previous, 0.0);
    assert_eq!(overview.trend.trending, TrendDirection::Stable);
    assert_eq!(overview.wage.annual_amount, 12000.0);
    assert_eq!(
        overview.insights,
        vec![
            "Excellent savings! You are saving 50.0% of your income.".to_string(),
            "You are over budget in 1 category: Food.".to_string(),
            "Food makes up 60.0% of your spending.".to_string(),
        ]
    );
}

#[test]
fn test_summary_report_does_not_project_future_wages() {
    let db = Database::in_memory().unwrap();
    db.insert_wage(&NewWageEntry {
        monthly_amount: 2000.0,
        effective_date: date(2024, 1, 1),
        description: None,
    })
    .unwrap();

    let year = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    let summary = db.summary_report(&year, date(2024, 3, 15)).unwrap();
    assert_eq!(summary.total_income, 6000.0);
}

#[test]
fn test_monthly_report() {
    let db = Database::in_memory().unwrap();
    db.insert_expense(&new_expense(45.0, ExpenseCategory::Utilities, date(2024, 2, 3)))
        .unwrap();

    let series = db.monthly_report(date(2024, 3, 10), 3).unwrap();
    let months: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
    assert_eq!(series[1].expenses, 45.0);
    assert_eq!(series[1].net, -45.0);
}

#[test]
fn test_summary_report_counts_wage_before_pending_raise() {
    let db = Database::in_memory().unwrap();
    for (amount, effective) in [(3000.0, date(2024, 1, 1)), (3500.0, date(2024, 3, 20))] {
        db.insert_wage(&NewWageEntry {
            monthly_amount: amount,
            effective_date: effective,
            description: None,
        })
        .unwrap();
    }

    let overview = db.overview(PeriodUnit::Month, date(2024, 3, 10)).unwrap();
    assert_eq!(overview.summary.total_income, 3000.0);
    assert!(!overview
        .insights
        .iter()
        .any(|i| i.starts_with("Your savings rate")));
}
