//! Tests for energy CSV table parsing and loading

use super::{load_energy_csv, parse_energy_csv};
use crate::error::EnergyError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = "BA Code,Timestamp (Hour Ending),Solar,Wind,Natural Gas\r\n\
CISO,\"11/9/2025 12 a.m. EST\",\"1,234.5\",300,N/A\r\n\
\r\n\
CISO,11/9/2025 1 a.m. EST,0,310\r\n";

fn origin() -> &'static Path {
    Path::new("test.csv")
}

#[test]
fn test_header_and_records_parsed() {
    let table = parse_energy_csv(SAMPLE_CSV, origin()).unwrap();

    assert_eq!(
        table.header.columns,
        vec!["BA Code", "Timestamp (Hour Ending)", "Solar", "Wind", "Natural Gas"]
    );
    assert_eq!(table.records.len(), 2);

    let first = &table.records[0];
    assert_eq!(first.value("Timestamp (Hour Ending)"), "11/9/2025 12 a.m. EST");
    assert_eq!(first.value("Solar"), "1,234.5");
    assert_eq!(first.value("Natural Gas"), "N/A");
}

#[test]
fn test_blank_lines_do_not_create_records() {
    let text = "\n\n  \nTimestamp (Hour Ending),Solar\n\n11/9/2025 3 p.m.,5\n   \n";
    let table = parse_energy_csv(text, origin()).unwrap();

    assert_eq!(table.header.columns, vec!["Timestamp (Hour Ending)", "Solar"]);
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0].value("Solar"), "5");
}

#[test]
fn test_short_row_tolerated() {
    let table = parse_energy_csv(SAMPLE_CSV, origin()).unwrap();
    let second = &table.records[1];

    assert_eq!(second.value("Wind"), "310");
    assert_eq!(second.get("Natural Gas"), Some(""));
}

#[test]
fn test_long_row_extra_fields_ignored() {
    let text = "Timestamp (Hour Ending),Solar\n11/9/2025 3 p.m.,5,99,100\n";
    let table = parse_energy_csv(text, origin()).unwrap();
    assert_eq!(table.records[0].value("Solar"), "5");
}

#[test]
fn test_empty_text_is_malformed() {
    let err = parse_energy_csv(" \r\n\n", origin()).unwrap_err();
    assert!(matches!(err, EnergyError::MalformedInput { .. }));
}

#[test]
fn test_header_only_file_has_no_records() {
    let table = parse_energy_csv("Timestamp (Hour Ending),Solar\n", origin()).unwrap();
    assert!(table.records.is_empty());
}

#[tokio::test]
async fn test_load_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE_CSV).unwrap();

    let table = load_energy_csv(file.path()).await.unwrap();
    assert_eq!(table.records.len(), 2);
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_energy_csv(&dir.path().join("missing.csv"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnergyError::Io(_)));
}

#[tokio::test]
async fn test_load_empty_file_is_malformed() {
    let file = NamedTempFile::new().unwrap();
    let err = load_energy_csv(file.path()).await.unwrap_err();
    assert!(matches!(err, EnergyError::MalformedInput { .. }));
}

/// Purpose: a stray non-UTF-8 byte in one cell leaves the other rows readable
#[tokio::test]
async fn test_load_invalid_utf8_keeps_rows() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Timestamp (Hour Ending),Solar,Wind\n11/9/2025 1 a.m. EST,5,\xff9\n11/9/2025 2 a.m. EST,6,7\n")
        .unwrap();

    let table = load_energy_csv(file.path()).await.unwrap();
    assert_eq!(table.records.len(), 2);
    assert_eq!(table.records[0].value("Solar"), "5");
    assert_eq!(table.records[0].value("Wind"), "\u{fffd}9");
    assert_eq!(table.records[1].value("Wind"), "7");
}
