use chrono::{DateTime, Utc};

/// Render a timestamp the way the `storage/v1` API does.
///
/// RFC 3339 in UTC, truncated to microseconds. Trailing zeros of the
/// fraction are trimmed and a zero fraction is dropped entirely, so
/// `2024-01-02T03:04:05.120000Z` renders as `2024-01-02T03:04:05.12Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    let base = ts.format("%Y-%m-%dT%H:%M:%S");
    // Leap-second representations carry a sub-second value above one second.
    let micros = ts.timestamp_subsec_micros().min(999_999);
    if micros == 0 {
        return format!("{base}Z");
    }
    let fraction = format!("{micros:06}");
    format!("{base}.{}Z", fraction.trim_end_matches('0'))
}
