//! Report window parsing and interval arithmetic

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::error::{AppError, AppResult};

const HOUR_MILLIS: f64 = 3_600_000.0;
const DAY_MILLIS: f64 = 86_400_000.0;

/// The `[start, end]` timestamp range a report is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    /// Build a window from already-validated instants.
    /// Caller guarantees `start <= end`; aggregators do not re-validate.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse a window from query-string dates: RFC 3339 or `YYYY-MM-DD`
    /// (date-only values mean midnight UTC). Unparseable input or an
    /// inverted range is a rejected request.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let start = parse_instant(start)?;
        let end = parse_instant(end)?;
        if end < start {
            return Err(AppError::validation(
                "End date must not be before start date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Window length in hours
    pub fn duration_hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }

    /// Number of calendar days covered, rounded up
    pub fn total_days(&self) -> i64 {
        let millis = (self.end - self.start).num_milliseconds();
        (millis as f64 / DAY_MILLIS).ceil() as i64
    }
}

fn parse_instant(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(AppError::validation(format!(
        "Invalid date format, expected RFC 3339 or YYYY-MM-DD: {raw}"
    )))
}

/// Elapsed hours between two instants.
/// Callers rely on the interval invariant `end >= start`.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / HOUR_MILLIS
}

/// Overlap between an interval and the window, in hours, clamped to zero.
///
/// Used identically for maintenance blackouts and order occupancy. Returns 0
/// when the interval does not intersect the window; the result is bounded by
/// both the interval length and the window length.
pub fn overlap_hours(
    interval_start: DateTime<Utc>,
    interval_end: DateTime<Utc>,
    window: &ReportWindow,
) -> f64 {
    let clamped_start = interval_start.max(window.start);
    let clamped_end = interval_end.min(window.end);
    let millis = (clamped_end - clamped_start).num_milliseconds();
    (millis as f64 / HOUR_MILLIS).max(0.0)
}
