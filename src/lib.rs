//! Campus Energy Library
//!
//! Energy back end for the campus room-booking application: reads the
//! operator-maintained energy-source CSV and reports watt-hours per source
//! for a requested hour of the day.
//!
//! This library provides tools for:
//! - Parsing the energy CSV with quote-aware field splitting
//! - Normalizing loose provider timestamps (`11/9/2025 12 a.m. EST`) to hour buckets
//! - Aggregating the first reading for an hour with zero-coerced numeric values
//! - Holding a manual override that supersedes the CSV until replaced or cleared
//! - Serving all of the above over HTTP with axum

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod override_slot;
pub mod parser;
pub mod service;
pub mod timestamp;
pub mod web;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{EnergyError, Result};
pub use models::{EnergyTable, HourlyAggregate, NormalizedTimestamp};
pub use override_slot::OverrideSlot;
pub use service::EnergyService;
