//! Energy CSV parser
//!
//! Turns the operator-maintained energy export into an [`EnergyTable`]:
//! - [`tokenizer`] - quote-aware field splitting for a single line
//! - [`table`] - line handling, header extraction and file loading
//!
//! ## Usage
//!
//! ```rust
//! use campus_energy::parser::parse_energy_csv;
//! use std::path::Path;
//!
//! let text = "Timestamp (Hour Ending),Solar\n11/9/2025 1 a.m. EST,\"1,200\"\n";
//! let table = parse_energy_csv(text, Path::new("inline.csv")).unwrap();
//! assert_eq!(table.records.len(), 1);
//! assert_eq!(table.records[0].value("Solar"), "1,200");
//! ```
//!
//! [`EnergyTable`]: crate::models::EnergyTable

pub mod table;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use table::{load_energy_csv, parse_energy_csv};
pub use tokenizer::split_fields;
