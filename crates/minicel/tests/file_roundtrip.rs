//! File round trip tests

use minicel::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_open_calculate_save() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");

    fs::write(&input, "price|qty|total\n10|=A1+A1|=A1+B1\n").unwrap();

    let mut sheet = Spreadsheet::open(&input).unwrap();
    sheet.calculate().unwrap();
    sheet.save(&output, &CsvWriteOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "price|qty|total\n10.000000|20.000000|30.000000\n"
    );
}

#[test]
fn test_calculated_output_reloads_as_numbers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.csv");

    let mut sheet: Spreadsheet = "1|=A0+1|label".parse().unwrap();
    sheet.calculate().unwrap();
    sheet.save(&path, &CsvWriteOptions::default()).unwrap();

    let reloaded = Spreadsheet::open(&path).unwrap();
    assert!(reloaded.arena().is_empty());
    assert_eq!(reloaded.table().cell(0, 1).unwrap(), &Cell::Number(2.0));
    assert_eq!(reloaded.table().cell(0, 2).unwrap(), &Cell::text("label"));
}

#[test]
fn test_custom_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.csv");
    fs::write(&path, "1;2;=A0+B0\n").unwrap();

    let read_options = CsvReadOptions {
        delimiter: b';',
        ..Default::default()
    };
    let mut sheet = Spreadsheet::open_with_options(&path, &read_options).unwrap();
    sheet.calculate().unwrap();

    let write_options = CsvWriteOptions {
        delimiter: b';',
        precision: 1,
    };
    let mut out = Vec::new();
    sheet.write(&mut out, &write_options).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1.0;2.0;3.0\n");
}

#[test]
fn test_open_missing_file() {
    let dir = tempdir().unwrap();
    let err = Spreadsheet::open(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
