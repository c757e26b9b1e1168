//! Time utilities: dwell formatting.

use chrono::Duration;

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Render a dwell time as HH:MM.
pub fn format_dwell(dwell: Duration) -> String {
    format_minutes(dwell.num_minutes())
}
