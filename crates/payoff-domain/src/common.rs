//! Money helpers and calendar utilities for payoff primitives.

use chrono::{Datelike, Duration, NaiveDate};

/// Monetary amount expressed in integer minor units (cents for USD).
pub type Money = i64;

/// Sums amounts, clamping at the `Money` bounds instead of overflowing.
pub fn saturating_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Money {
    amounts
        .into_iter()
        .fold(0, |total: Money, amount| total.saturating_add(amount))
}

/// Converts a display amount (e.g. dollars) into minor units, rounding half away from zero.
pub fn to_minor_units(amount: f64, precision: u8) -> Money {
    let scale = 10f64.powi(precision as i32);
    (amount * scale).round() as Money
}

/// Converts minor units back into a display amount.
pub fn from_minor_units(amount: Money, precision: u8) -> f64 {
    let scale = 10f64.powi(precision as i32);
    amount as f64 / scale
}

/// Number of minor-unit digits for an ISO 4217 code.
pub fn currency_precision(code: &str) -> u8 {
    match code.to_ascii_uppercase().as_str() {
        "JPY" | "KRW" | "CLP" => 0,
        "KWD" | "BHD" | "OMR" => 3,
        _ => 2,
    }
}

/// Returns true when both dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Short `"Mon YYYY"` label used for timeline months.
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", month_abbrev(date.month()), date.year())
}

/// Shifts `date` by a signed number of months, clamping the day to the target month.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_next) => (first_next - Duration::days(1)).day(),
        None => 28,
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
