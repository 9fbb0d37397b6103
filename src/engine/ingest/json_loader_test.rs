use crate::engine::errors::IngestError;
use crate::engine::ingest::load_records;
use indoc::indoc;
use std::fs;

#[test]
fn loads_a_json_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.json");
    fs::write(
        &path,
        indoc! {r#"
            [
              { "Transaction ID": "TXN-1", "Customer Name": "Asha Rao", "Quantity": 2 },
              { "Transaction ID": "TXN-2", "Customer Name": "Bina Das", "Quantity": null }
            ]
        "#},
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].transaction_id, "TXN-1");
    assert_eq!(records[1].quantity, None);
}

#[test]
fn empty_array_loads_as_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.json");
    fs::write(&path, "[]").unwrap();
    assert!(load_records(&path).unwrap().is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.json");
    fs::write(&path, "{ not json").unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::Json(_)));
}
