//! Manual override slot for energy readings.
//!
//! A single aggregate pushed by an operator. While set it is returned for
//! every read regardless of the requested hour; it has no expiry and no
//! per-hour history. It lives until it is replaced, cleared or the process
//! exits.

use crate::aggregator::coerce_number;
use crate::error::{EnergyError, Result};
use crate::models::HourlyAggregate;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::info;

/// Lock-guarded single-value override store
#[derive(Debug, Default)]
pub struct OverrideSlot {
    current: RwLock<Option<HourlyAggregate>>,
}

impl OverrideSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot wholesale
    pub fn set(&self, aggregate: HourlyAggregate) {
        info!("Energy override set with {} sources", aggregate.len());
        *self.current.write() = Some(aggregate);
    }

    /// Snapshot of the current override, if any
    pub fn get(&self) -> Option<HourlyAggregate> {
        self.current.read().clone()
    }

    /// Empty the slot, returning what was stored
    pub fn clear(&self) -> Option<HourlyAggregate> {
        let previous = self.current.write().take();
        if previous.is_some() {
            info!("Energy override cleared");
        }
        previous
    }

    pub fn is_set(&self) -> bool {
        self.current.read().is_some()
    }
}

/// Convert an override payload into an aggregate.
///
/// The payload must be a JSON object. Each value is coerced to a number:
/// numbers pass through, strings are parsed (thousands separators are not
/// accepted here), booleans become 1/0, everything else becomes 0. Arrays
/// are not unwrapped, so `[5]` is 0 rather than 5.
pub fn coerce_payload(payload: &Value) -> Result<HourlyAggregate> {
    let object = match payload {
        Value::Object(object) => object,
        Value::Array(_) => {
            return Err(EnergyError::invalid_payload(
                "Expected an object of {source: wh}, got an array",
            ));
        }
        _ => {
            return Err(EnergyError::invalid_payload(
                "Expected an object of {source: wh}",
            ));
        }
    };

    Ok(object
        .iter()
        .map(|(source, value)| (source.clone(), coerce_value(value)))
        .collect())
}

fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => coerce_number(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}
