//! Hourly bucketing and aggregation of energy readings.
//!
//! Picks the first record whose normalized timestamp falls in the target
//! hour and turns its source columns into an [`HourlyAggregate`]. Later
//! records in the same hour are not consulted.

use crate::constants::MAX_HOUR;
use crate::models::{EnergyTable, HourlyAggregate};
use crate::timestamp::hour_bucket;
use tracing::{debug, warn};

/// Resolve the hour to aggregate.
///
/// A caller-supplied hour wins when it is an integer in `0..=23`; anything
/// else is ignored and the current server hour is used instead.
pub fn resolve_target_hour(requested: Option<&str>, now_hour: u32) -> u32 {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        None => now_hour,
        Some(raw) => match parse_hour(raw) {
            Some(hour) => hour,
            None => {
                warn!(
                    "Ignoring invalid hour '{}', using current hour {}",
                    raw, now_hour
                );
                now_hour
            }
        },
    }
}

/// Parse an hour-of-day, accepting integral forms such as `7` or `7.0`
pub fn parse_hour(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.fract() != 0.0 || !(0.0..=f64::from(MAX_HOUR)).contains(&value) {
        return None;
    }
    // Range and integrality checked above
    Some(value as u32)
}

/// Parse a numeric reading; thousands separators are removed and anything
/// unparseable, blank or non-finite becomes `0`
pub fn parse_reading(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|&c| c != ',').collect();
    coerce_number(&cleaned)
}

/// Coerce text to a finite number, defaulting to `0`
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Aggregate the first record in `hour`, or `None` when no record falls in it
pub fn aggregate_hour(table: &EnergyTable, hour: u32) -> Option<HourlyAggregate> {
    let (index, record) = table
        .records
        .iter()
        .enumerate()
        .find(|(_, record)| hour_bucket(table.raw_timestamp(record)) == Some(hour))?;

    debug!(
        "Hour {} matched record {} ('{}')",
        hour,
        index,
        table.raw_timestamp(record)
    );

    let aggregate = table
        .header
        .source_columns()
        .map(|column| (column.to_string(), parse_reading(record.value(column))))
        .collect();

    Some(aggregate)
}
