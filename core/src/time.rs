//! Time related utils.

use chrono::Utc;

/// DateTime in UTC, the only timezone signing cares about.
pub type DateTime = chrono::DateTime<Utc>;

/// Current time in UTC.
#[inline]
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as ISO 8601 with exactly three fractional digits.
///
/// ```text
/// 2021-05-01T12:00:00.123Z
/// ```
pub fn format_iso8601_millis(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
