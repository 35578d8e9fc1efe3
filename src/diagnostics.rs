//! Timestamp coverage report for an energy CSV.
//!
//! Answers the questions that come up when the chart is unexpectedly empty:
//! which hours does the file cover, how do the raw stamps normalize, and
//! does anything match the current server hour.

use crate::models::{EnergyTable, NormalizedTimestamp};
use crate::timestamp::normalize_timestamp;
use serde::Serialize;
use std::collections::BTreeSet;

/// One raw timestamp and what it normalized to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampSample {
    pub row: usize,
    pub raw: String,
    pub normalized: Option<NormalizedTimestamp>,
}

/// Hour coverage of a parsed energy table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub total_records: usize,
    pub unparseable_records: usize,
    pub samples: Vec<TimestampSample>,
    pub hours_present: BTreeSet<u32>,
    pub current_hour: u32,
    pub matching_records: usize,
    pub first_match: Option<String>,
}

impl CoverageReport {
    pub fn build(table: &EnergyTable, current_hour: u32, sample_size: usize) -> Self {
        let normalized: Vec<(&str, Option<NormalizedTimestamp>)> = table
            .records
            .iter()
            .map(|record| {
                let raw = table.raw_timestamp(record);
                (raw, normalize_timestamp(raw))
            })
            .collect();

        let samples = normalized
            .iter()
            .take(sample_size)
            .enumerate()
            .map(|(idx, (raw, ts))| TimestampSample {
                row: idx + 1,
                raw: (*raw).to_string(),
                normalized: *ts,
            })
            .collect();

        let hours_present = normalized
            .iter()
            .filter_map(|(_, ts)| ts.map(|t| t.hour()))
            .collect();

        let mut matches = normalized
            .iter()
            .filter(|(_, ts)| ts.is_some_and(|t| t.hour() == current_hour));
        let first_match = matches.next().map(|(raw, _)| (*raw).to_string());
        let matching_records = usize::from(first_match.is_some()) + matches.count();

        Self {
            total_records: table.records.len(),
            unparseable_records: normalized.iter().filter(|(_, ts)| ts.is_none()).count(),
            samples,
            hours_present,
            current_hour,
            matching_records,
            first_match,
        }
    }

    /// Hours present, comma-joined
    pub fn hours_list(&self) -> String {
        self.hours_present
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}
