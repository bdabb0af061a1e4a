// Date utility functions
// Display helpers for booking dates

use crate::models::settings::DEFAULT_DATE_FORMAT;
use chrono::NaiveDate;
use std::fmt::Write;

/// Format a date with a chrono format string, falling back to `dd.MM.yyyy`
/// when the format string is not understood.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        log::warn!("Invalid date format '{}', using default", format);
        out.clear();
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// "01.07.2025 – 05.07.2025"
pub fn format_range(arrival: NaiveDate, departure: NaiveDate, format: &str) -> String {
    format!(
        "{} – {}",
        format_date(arrival, format),
        format_date(departure, format)
    )
}

pub fn nights_label(nights: i64) -> String {
    match nights {
        0 => "Day visit".to_string(),
        1 => "1 night".to_string(),
        n => format!("{} nights", n),
    }
}
