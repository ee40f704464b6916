//! Human-readable "time ago" strings for recent activity.

const SECOND_MS: i64 = 1000;

/// Formats how long ago `timestamp` was, relative to `now` (both in epoch ms).
///
/// Anything seven days or older collapses to `"Last week"`. A timestamp in the
/// future reads as `"0 seconds ago"`.
pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let seconds = now.saturating_sub(timestamp).max(0) / SECOND_MS;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        ago(seconds, "second")
    } else if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        ago(days, "day")
    } else {
        "Last week".to_string()
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
