//! Display helpers shared by the views.

use chrono::{DateTime, Datelike, NaiveDate};

/// `2025-03-15T00:00:00.000Z` -> `3/15/2025`. Falls back to the raw value
/// when it is not an ISO date.
pub fn display_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => raw.to_string(),
    }
}

/// Value for a date input: everything before the `T`.
pub fn date_input_value(raw: &str) -> String {
    raw.split('T').next().unwrap_or_default().to_string()
}

pub fn display_amount(amount: f64) -> String {
    format!("₹{amount}")
}

pub fn display_rating(rating: f64, total_reviews: Option<u32>) -> String {
    format!("{rating:.1} / 5 ({} reviews)", total_reviews.unwrap_or(0))
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(&date_input_value(raw), "%Y-%m-%d").ok()
}
