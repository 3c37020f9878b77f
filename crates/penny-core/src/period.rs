//! Period calendar
//!
//! Computes calendar-aligned month, quarter and year intervals anchored to a
//! reference date, plus the interval immediately before each one.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::{DateRange, PeriodInfo, PeriodUnit};

/// Current and previous interval for `unit`, evaluated against today's local date
pub fn period_info(unit: PeriodUnit) -> PeriodInfo {
    period_info_at(unit, Local::now().date_naive())
}

/// Current and previous interval for `unit`, evaluated against `today`
pub fn period_info_at(unit: PeriodUnit, today: NaiveDate) -> PeriodInfo {
    let (year, month) = (today.year(), today.month());

    match unit {
        PeriodUnit::Month => {
            let (prev_year, prev_month) = shift_months(year, month, -1);
            let current = month_range(year, month, year, month);
            PeriodInfo {
                label: current.start.format("%B %Y").to_string(),
                current,
                previous: month_range(prev_year, prev_month, prev_year, prev_month),
            }
        }
        PeriodUnit::Quarter => {
            let quarter = (month - 1) / 3;
            let first_month = quarter * 3 + 1;
            let (end_year, end_month) = shift_months(year, first_month, 2);
            let (prev_year, prev_first) = shift_months(year, first_month, -3);
            let (prev_end_year, prev_end_month) = shift_months(year, first_month, -1);
            PeriodInfo {
                label: format!("Q{} {}", quarter + 1, year),
                current: month_range(year, first_month, end_year, end_month),
                previous: month_range(prev_year, prev_first, prev_end_year, prev_end_month),
            }
        }
        PeriodUnit::Year => PeriodInfo {
            label: year.to_string(),
            current: month_range(year, 1, year, 12),
            previous: month_range(year - 1, 1, year - 1, 12),
        },
    }
}

/// The `count` whole calendar months ending with the month containing `today`
pub fn trailing_months(today: NaiveDate, count: u32) -> DateRange {
    let count = count.max(1);
    let (year, month) = (today.year(), today.month());
    let (start_year, start_month) = shift_months(year, month, -(count as i32 - 1));
    month_range(start_year, start_month, year, month)
}

/// First day of the given month
pub fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 of a valid month")
}

/// Last day of the given month
pub fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = shift_months(year, month, 1);
    month_start(next_year, next_month) - Duration::days(1)
}

/// Move a (year, month) pair by `delta` months, crossing year boundaries
pub fn shift_months(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}

fn month_range(start_year: i32, start_month: u32, end_year: i32, end_month: u32) -> DateRange {
    DateRange {
        start: month_start(start_year, start_month),
        end: month_end(end_year, end_month),
    }
}
