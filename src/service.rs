//! Energy read/write service.
//!
//! Combines the override slot with per-request CSV aggregation:
//! 1. an override, when set, answers every read
//! 2. otherwise the CSV is loaded fresh and the resolved hour aggregated
//! 3. otherwise the result is an empty aggregate
//!
//! A missing or unreadable CSV is never an error for readers.

use crate::aggregator::{aggregate_hour, resolve_target_hour};
use crate::error::Result;
use crate::models::HourlyAggregate;
use crate::override_slot::{OverrideSlot, coerce_payload};
use crate::parser::load_energy_csv;
use chrono::{Local, Timelike};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a read was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingOrigin {
    Override,
    Csv { hour: u32 },
    Empty { hour: u32 },
}

/// Energy service shared by the HTTP handlers and CLI commands
#[derive(Debug, Clone)]
pub struct EnergyService {
    csv_path: PathBuf,
    slot: Arc<OverrideSlot>,
}

impl EnergyService {
    pub fn new(csv_path: impl Into<PathBuf>, slot: Arc<OverrideSlot>) -> Self {
        Self {
            csv_path: csv_path.into(),
            slot,
        }
    }

    /// Service with its own empty override slot
    pub fn with_csv(csv_path: impl Into<PathBuf>) -> Self {
        Self::new(csv_path, Arc::new(OverrideSlot::new()))
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn override_active(&self) -> bool {
        self.slot.is_set()
    }

    /// Read for an optional caller-supplied hour against an explicit current hour
    pub async fn read(&self, requested_hour: Option<&str>, now_hour: u32) -> HourlyAggregate {
        self.read_with_origin(requested_hour, now_hour).await.0
    }

    /// Read using the server's local wall-clock hour as the fallback
    pub async fn read_now(&self, requested_hour: Option<&str>) -> HourlyAggregate {
        self.read(requested_hour, current_hour()).await
    }

    /// Read, also reporting which path produced the answer
    pub async fn read_with_origin(
        &self,
        requested_hour: Option<&str>,
        now_hour: u32,
    ) -> (HourlyAggregate, ReadingOrigin) {
        if let Some(aggregate) = self.slot.get() {
            debug!("Serving energy override");
            return (aggregate, ReadingOrigin::Override);
        }

        let hour = resolve_target_hour(requested_hour, now_hour);
        match self.aggregate_from_file(hour).await {
            Some(aggregate) => (aggregate, ReadingOrigin::Csv { hour }),
            None => (HourlyAggregate::new(), ReadingOrigin::Empty { hour }),
        }
    }

    /// Aggregate the CSV for `hour`; `None` when the file is unusable or has no row for it
    pub async fn aggregate_from_file(&self, hour: u32) -> Option<HourlyAggregate> {
        let table = match load_energy_csv(&self.csv_path).await {
            Ok(table) => table,
            Err(e) => {
                warn!("No file data available from {}: {}", self.csv_path.display(), e);
                return None;
            }
        };

        let aggregate = aggregate_hour(&table, hour);
        if aggregate.is_none() {
            debug!(
                "No record for hour {} in {}",
                hour,
                self.csv_path.display()
            );
        }
        aggregate
    }

    /// Replace the override slot from a JSON payload; nothing changes on error
    pub fn write(&self, payload: &Value) -> Result<HourlyAggregate> {
        let aggregate = coerce_payload(payload)?;
        self.slot.set(aggregate.clone());
        Ok(aggregate)
    }

    pub fn clear_override(&self) -> Option<HourlyAggregate> {
        self.slot.clear()
    }
}

/// Current hour in the server's local time zone
pub fn current_hour() -> u32 {
    Local::now().hour()
}
