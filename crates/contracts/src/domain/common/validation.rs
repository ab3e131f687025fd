use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date as produced by `<input type="date">`
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// True for empty or whitespace-only input
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
