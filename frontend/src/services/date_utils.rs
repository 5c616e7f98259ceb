use chrono::NaiveDate;
use shared::parse_calendar_date;

/// Abbreviated month and day for chart axes, e.g. "Mar 5".
/// Unparseable input is returned as-is.
pub fn format_month_day(raw: &str) -> String {
    format_with(raw, "%b %-d")
}

/// Long form for tables and lists, e.g. "March 5, 2025"
pub fn format_display_date(raw: &str) -> String {
    format_with(raw, "%B %-d, %Y")
}

fn format_with(raw: &str, pattern: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

/// Validate a `YYYY-MM-DD` value coming from a date input
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
