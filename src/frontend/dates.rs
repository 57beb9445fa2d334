use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Formats a backend timestamp as `YYYY/M/D`. Timestamps that cannot be
/// parsed are shown as they came.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => format!("{}/{}/{}", date.year(), date.month(), date.day()),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
