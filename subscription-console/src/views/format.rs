//! Display formatting shared by every page.

use chrono::DateTime;

pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// `YYYY-MM-DD HH:MM:SS` in UTC; unset timestamps render as "-".
pub fn datetime(timestamp: i64) -> String {
    with_timestamp(timestamp, "%Y-%m-%d %H:%M:%S")
}

pub fn date(timestamp: i64) -> String {
    with_timestamp(timestamp, "%Y-%m-%d")
}

pub fn days(count: i32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}

/// One decimal, e.g. `37.5%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn with_timestamp(timestamp: i64, pattern: &str) -> String {
    if timestamp <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| "-".to_string())
}
