//! Timestamp normalization for provider energy exports.
//!
//! Exports label each row with an hour-ending stamp in one of several loose
//! shapes: `11/9/2025 12 a.m. EST`, `11/9/2025 12:00 AM`, `11/9/2025 13:00`.
//! Normalization matches `M/D/YYYY H[:MM[:SS]] [meridiem]` explicitly and
//! builds the calendar point from the captured numbers. Nothing is delegated
//! to a locale- or zone-aware date parser, and trailing zone text is ignored.
//!
//! Day, hour and minute values past their natural range roll over into the
//! next unit (`2/30/2025` is March 2nd, `11/9/2025 24:30` is 00:30 on the
//! 10th). Only the month must be real.

use crate::models::NormalizedTimestamp;
use chrono::{Duration, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `M/D/YYYY H[:MM[:SS]] [am|pm|a.m.|p.m.|a.m|p.m]`, case-insensitive.
///
/// The time must not run into further digits or colons, so `100` or
/// `3:0` never match as a shorter hour.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2})(?::(\d{2}))?(?::\d{2})?(?:\s*(a\.m\.|a\.m|am|p\.m\.|p\.m|pm))?(?:[^\d:]|$)",
    )
    .expect("Invalid timestamp regex")
});

/// Meridiem marker attached to an hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_token(token: &str) -> Self {
        if token.to_ascii_lowercase().contains('p') {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// Convert a 12-hour clock value to 24-hour; hours above 12 pass through
    pub fn to_24_hour(self, hour: u32) -> u32 {
        match self {
            Meridiem::Am if hour == 12 => 0,
            Meridiem::Pm if hour < 12 => hour + 12,
            _ => hour,
        }
    }
}

/// Normalize a raw timestamp field.
///
/// Returns `None` when the field does not match the pattern or names a
/// month outside 1-12.
pub fn normalize_timestamp(raw: &str) -> Option<NormalizedTimestamp> {
    let captures = TIMESTAMP_RE.captures(raw.trim())?;

    let number = |idx: usize| -> Option<u32> { captures.get(idx)?.as_str().parse().ok() };
    let month = number(1)?;
    let day = number(2)?;
    let year: i32 = captures.get(3)?.as_str().parse().ok()?;
    let mut hour = number(4)?;
    let minute = number(5).unwrap_or(0);

    if let Some(token) = captures.get(6) {
        hour = Meridiem::from_token(token.as_str()).to_24_hour(hour);
    }

    let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
        trace!("Rejecting timestamp '{}': month {} out of range", raw, month);
        return None;
    };

    let offset = Duration::days(i64::from(day) - 1)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute));
    let datetime = first_of_month
        .and_time(NaiveTime::MIN)
        .checked_add_signed(offset)?;

    Some(NormalizedTimestamp::new(datetime))
}

/// Hour bucket for a raw timestamp field
pub fn hour_bucket(raw: &str) -> Option<u32> {
    normalize_timestamp(raw).map(|ts| ts.hour())
}
