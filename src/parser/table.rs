//! Energy CSV table construction and file loading

use super::tokenizer::split_fields;
use crate::error::{EnergyError, Result};
use crate::models::{EnergyTable, Header, RawRecord};
use std::path::Path;
use tracing::{debug, warn};

/// Parse full CSV text into a header and records.
///
/// Lines are split on `\n` (a trailing `\r` is dropped with the rest of the
/// surrounding whitespace) and blank lines are discarded before the header
/// is taken, so they never shift row positions.
pub fn parse_energy_csv(text: &str, origin: &Path) -> Result<EnergyTable> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| EnergyError::malformed(origin, "file contains no header line"))?;
    let header = Header::new(split_fields(header_line));

    let records: Vec<RawRecord> = lines
        .map(|line| RawRecord::from_fields(&header, split_fields(line)))
        .collect();

    debug!(
        "Parsed {} columns and {} records from {}",
        header.len(),
        records.len(),
        origin.display()
    );

    Ok(EnergyTable { header, records })
}

/// Read and parse the CSV at `path`; no retries, the file is operator-maintained.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD so one bad cell does not
/// cost the whole file.
pub async fn load_energy_csv(path: &Path) -> Result<EnergyTable> {
    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, std::borrow::Cow::Owned(_)) {
        warn!("{} contains invalid UTF-8; bad bytes replaced", path.display());
    }
    parse_energy_csv(&text, path)
}
