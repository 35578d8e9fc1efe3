//! Core data structures for energy ingestion.
//!
//! Defines the parsed CSV table, the normalized timestamp and the
//! per-hour aggregate returned to callers.

use crate::constants::{EXCLUDED_COLUMNS, TIMESTAMP_COLUMN};
use chrono::{NaiveDateTime, Timelike};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Ordered column names from the first non-blank CSV line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Name of the timestamp column as it appears in this header.
    ///
    /// Falls back to a case-insensitive match when the exact name is absent.
    pub fn timestamp_column(&self) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.as_str() == TIMESTAMP_COLUMN)
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|c| c.eq_ignore_ascii_case(TIMESTAMP_COLUMN))
            })
            .map(String::as_str)
    }

    /// Whether a column is never emitted in aggregated output
    pub fn is_excluded(&self, column: &str) -> bool {
        EXCLUDED_COLUMNS.contains(&column) || Some(column) == self.timestamp_column()
    }

    /// Columns carrying energy-source readings, in header order
    pub fn source_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| !self.is_excluded(c))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One CSV data row keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Pair header columns with row fields; absent trailing fields become empty strings
    pub fn from_fields(header: &Header, fields: Vec<String>) -> Self {
        let mut values = fields.into_iter();
        let fields = header
            .columns
            .iter()
            .map(|column| (column.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Raw value for a column, or `None` if the header has no such column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw value for a column, treating unknown columns as blank
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

/// Header plus data rows, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergyTable {
    pub header: Header,
    pub records: Vec<RawRecord>,
}

impl EnergyTable {
    /// Raw timestamp text for a record (empty when the column is missing)
    pub fn raw_timestamp<'a>(&self, record: &'a RawRecord) -> &'a str {
        self.header
            .timestamp_column()
            .map(|c| record.value(c))
            .unwrap_or("")
    }
}

/// Naive calendar point at minute precision; any source time zone is discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NormalizedTimestamp(NaiveDateTime);

impl NormalizedTimestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Hour bucket 0-23
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl std::fmt::Display for NormalizedTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Energy-source name to watt-hours for one hour, in header order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HourlyAggregate(IndexMap<String, f64>);

/// Integral readings are written as JSON integers (`100`, not `100.0`)
impl Serialize for HourlyAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (source, &value) in &self.0 {
            if value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
                map.serialize_entry(source, &(value as i64))?;
            } else {
                map.serialize_entry(source, &value)?;
            }
        }
        map.end()
    }
}

/// Largest magnitude at which every integer is exactly representable in an f64
const INTEGRAL_LIMIT: f64 = 9_007_199_254_740_992.0;

impl HourlyAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, watt_hours: f64) {
        self.0.insert(source.into(), watt_hours);
    }

    pub fn get(&self, source: &str) -> Option<f64> {
        self.0.get(source).copied()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all sources
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for HourlyAggregate {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
