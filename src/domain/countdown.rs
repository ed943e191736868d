// ============================================================================
// Countdown
// Whole days, hours and minutes left until a target instant
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use std::fmt;

/// Naive layouts accepted after RFC 3339; all are read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Time left until a target, truncated to whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    /// Nothing left
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
    };

    /// Split the time from `now` to `target`; a target not in the future is zero.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let remaining = target.signed_duration_since(now);
        if remaining <= TimeDelta::zero() {
            return Self::ZERO;
        }

        Self {
            days: remaining.num_days(),
            hours: remaining.num_hours() % 24,
            minutes: remaining.num_minutes() % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D {}H {}M", self.days, self.hours, self.minutes)
    }
}

/// Parse an ISO 8601 / RFC 3339 timestamp or a bare date.
pub fn parse_target_date(target: &str) -> Option<DateTime<Utc>> {
    let target = target.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(target) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(target, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(target, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Countdown from `now` to `target`, as `"{d}D {h}H {m}M"`.
///
/// An unparseable target is logged and reads as `"0D 0H 0M"`.
pub fn format_countdown_at(target: &str, now: DateTime<Utc>) -> String {
    match parse_target_date(target) {
        Some(target) => Countdown::between(now, target).to_string(),
        None => {
            tracing::warn!(target_date = target, "Unparseable countdown target");
            Countdown::ZERO.to_string()
        }
    }
}

/// Countdown from the current wall-clock time to `target`.
pub fn format_countdown(target: &str) -> String {
    format_countdown_at(target, Utc::now())
}
