//! File-based tests for resilient JSONL loading.

use rstest::rstest;
use serde::Deserialize;
use std::io::Write;
use storyline_jsonl::{Error, Warning, read_jsonl_resilient};
use tempfile::NamedTempFile;

#[derive(Debug, Deserialize, PartialEq)]
struct Record {
    id: String,
    #[serde(default)]
    deps: Vec<String>,
}

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[tokio::test]
async fn reads_all_valid_records() {
    let file = write_file("{\"id\":\"A\"}\n{\"id\":\"B\",\"deps\":[\"A\"]}\n");

    let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path())
        .await
        .expect("read should succeed");

    assert!(warnings.is_empty());
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].deps, vec!["A".to_string()]);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = read_jsonl_resilient::<Record, _>(dir.path().join("absent.jsonl")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}

#[rstest]
#[case::truncated_object("{\"id\":\"A\"", "malformed_json")]
#[case::plain_text("hello", "malformed_json")]
#[case::wrong_field_type("{\"id\":7}", "invalid_record")]
#[case::missing_required_field("{\"deps\":[]}", "invalid_record")]
#[tokio::test]
async fn bad_line_is_reported_with_its_line_number(#[case] bad: &str, #[case] kind: &str) {
    let file = write_file(&format!("{{\"id\":\"A\"}}\n\n{bad}\n{{\"id\":\"B\"}}\n"));

    let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path())
        .await
        .expect("read should succeed despite bad line");

    assert_eq!(records.len(), 2);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind(), kind);
    assert_eq!(warnings[0].line_number(), 3);
}

#[tokio::test]
async fn file_of_only_garbage_yields_no_records() {
    let file = write_file("x\ny\nz\n");

    let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path())
        .await
        .expect("read should succeed");

    assert!(records.is_empty());
    let lines: Vec<usize> = warnings.iter().map(Warning::line_number).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}
