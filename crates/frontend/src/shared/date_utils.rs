/// Utilities for dates and amounts shown in the dashboards
use chrono::{Local, NaiveDate};

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO form used by `<input type="date">` min attributes
/// Example: 2025-01-05 -> "2025-01-05"
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Two decimal places, no thousands separator
/// Example: 1234.5 -> "1234.50"
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
