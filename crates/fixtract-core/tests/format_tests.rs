//! Parser-validation scenarios for the bundled fixture archive.
//!
//! Each test extracts one member out of `tests/fixtures/archive.zip` and
//! feeds the buffer into the parser crate owning that format, asserting on
//! known values baked into the fixture. Parser failures propagate per each
//! parser's own contract; nothing here masks or reinterprets them.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Cursor;
use std::path::PathBuf;

use calamine::Data;
use calamine::Reader;
use calamine::Xlsx;
use fixtract_core::EntryData;
use fixtract_core::ZipExtractor;
use serde::Deserialize;

fn extract_fixture_entry(suffix: &str) -> EntryData {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/archive.zip");
    ZipExtractor::open(path)
        .expect("fixture archive should open")
        .extract_first(suffix)
        .expect("extraction should succeed")
        .unwrap_or_else(|| panic!("archive should contain a {suffix} entry"))
}

#[test]
fn test_csv_row_field_matches_expected_literal() {
    let entry = extract_fixture_entry(".csv");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(entry.bytes());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("csv should parse");

    assert_eq!(&rows[2][6], "8754324321");
}

#[test]
fn test_spreadsheet_first_cell_is_expected_numeric() {
    let entry = extract_fixture_entry(".xlsx");

    let mut workbook =
        Xlsx::new(Cursor::new(entry.into_bytes())).expect("spreadsheet should parse");
    let range = workbook
        .worksheet_range_at(0)
        .expect("sheet 0 should exist")
        .expect("sheet 0 should parse");

    assert_eq!(range.get_value((0, 0)), Some(&Data::Float(1_465_000.0)));
}

#[test]
fn test_document_has_two_pages() {
    let entry = extract_fixture_entry(".pdf");

    let document = lopdf::Document::load_mem(entry.bytes()).expect("document should parse");
    assert_eq!(document.get_pages().len(), 2);
}

#[test]
fn test_json_generic_tree_fields() {
    let entry = extract_fixture_entry(".json");

    let tree: serde_json::Value =
        serde_json::from_slice(entry.bytes()).expect("json should parse");
    assert_eq!(tree["name"], "Andromeda");
    assert_eq!(tree["innerData"]["age"], 100_000);
    assert_eq!(tree["innerData"]["type"], "Galaxy");
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GalaxyRecord {
    name: String,
    inner_data: InnerData,
}

#[derive(Debug, Deserialize, PartialEq)]
struct InnerData {
    age: u64,
    #[serde(rename = "type")]
    kind: String,
}

#[test]
fn test_json_typed_record_fields() {
    let entry = extract_fixture_entry(".json");

    let record: GalaxyRecord =
        serde_json::from_slice(entry.bytes()).expect("json should deserialize");
    assert_eq!(record.name, "Andromeda");
    assert_eq!(record.inner_data.age, 100_000);
    assert_eq!(record.inner_data.kind, "Galaxy");
}

#[test]
fn test_every_member_parses_with_its_format_reader() {
    // Mirrors the dispatch loop a consumer would run over an unknown
    // fixture: route each member by suffix and let its parser validate it.
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/archive.zip");
    let mut archive = ZipExtractor::open(path).expect("fixture archive should open");

    let dispatched = archive
        .for_each_matching("", |entry| {
            if entry.name().ends_with(".csv") {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .from_reader(entry.bytes());
                assert!(reader.records().all(|r| r.is_ok()));
            } else if entry.name().ends_with(".xlsx") {
                let bytes = entry.into_bytes();
                assert!(Xlsx::new(Cursor::new(bytes)).is_ok());
            } else if entry.name().ends_with(".pdf") {
                assert!(lopdf::Document::load_mem(entry.bytes()).is_ok());
            } else if entry.name().ends_with(".json") {
                assert!(serde_json::from_slice::<serde_json::Value>(entry.bytes()).is_ok());
            } else {
                panic!("unexpected fixture member: {}", entry.name());
            }
            Ok(())
        })
        .expect("dispatch should succeed");

    assert_eq!(dispatched, 4);
}
