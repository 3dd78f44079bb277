//! Tests for cross-date correlation retrieval.

use std::fs;

use logquery::catalog::FileCatalog;
use logquery::correlation_query::query_by_correlation_id;
use logquery::error::QueryError;
use tempfile::tempdir;

fn tagged_line(ts: &str, log_id: &str, msg: &str) -> String {
    format!(r#"{{"timestamp":"{ts}","level":"INFO","message":"{msg}","log_id":"{log_id}"}}"#)
}

#[test]
fn test_merges_across_files_sorted_by_timestamp() {
    let dir = tempdir().unwrap();
    // Files written newest-date first; creation order must not matter.
    fs::write(
        dir.path().join("app-2024-01-17.log"),
        tagged_line("2024-01-17T09:00:00Z", "X", "t3"),
    )
    .unwrap();
    fs::write(
        dir.path().join("app-2024-01-15.log"),
        tagged_line("2024-01-15T09:00:00Z", "X", "t1"),
    )
    .unwrap();
    fs::write(
        dir.path().join("app-2024-01-16.log"),
        tagged_line("2024-01-16T09:00:00Z", "X", "t2"),
    )
    .unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "X").unwrap();
    let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_filters_out_other_ids() {
    let dir = tempdir().unwrap();
    let content = [
        tagged_line("2024-01-15T08:00:00Z", "X", "keep"),
        tagged_line("2024-01-15T09:00:00Z", "Y", "drop"),
        tagged_line("2024-01-15T10:00:00Z", "X", "keep too"),
    ]
    .join("\n");
    fs::write(dir.path().join("app-2024-01-15.log"), content).unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "X").unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.log_id == "X"));
}

#[test]
fn test_empty_id_matches_nothing() {
    let dir = tempdir().unwrap();
    // An entry with no log_id must not match the empty id.
    fs::write(
        dir.path().join("app-2024-01-15.log"),
        r#"{"timestamp":"2024-01-15T08:00:00Z","message":"untagged"}"#,
    )
    .unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_empty_id_succeeds_without_directory() {
    let catalog = FileCatalog::new("/nonexistent/logquery-test-dir");
    let entries = query_by_correlation_id(&catalog, "").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_no_match_is_empty_success() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("app-2024-01-15.log"),
        tagged_line("2024-01-15T08:00:00Z", "X", "a"),
    )
    .unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "no-such-id").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_missing_directory_propagates() {
    let catalog = FileCatalog::new("/nonexistent/logquery-test-dir");
    let err = query_by_correlation_id(&catalog, "X").unwrap_err();
    assert!(matches!(err, QueryError::DirectoryUnavailable(_)));
}

#[test]
fn test_unparseable_file_contributes_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app-2024-01-14.log"), "garbage\n}{\n").unwrap();
    fs::write(
        dir.path().join("app-2024-01-15.log"),
        tagged_line("2024-01-15T08:00:00Z", "X", "survives"),
    )
    .unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "X").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "survives");
}

#[test]
fn test_invalid_utf8_line_does_not_fail_scan() {
    let dir = tempdir().unwrap();
    let mut content = Vec::new();
    content.extend_from_slice(tagged_line("2024-01-15T08:00:00Z", "X", "before").as_bytes());
    content.extend_from_slice(b"\n\xff\xfe\xfd\n");
    content.extend_from_slice(tagged_line("2024-01-15T09:00:00Z", "X", "after").as_bytes());
    fs::write(dir.path().join("app-2024-01-15.log"), content).unwrap();

    let catalog = FileCatalog::new(dir.path());
    let entries = query_by_correlation_id(&catalog, "X").unwrap();
    let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["before", "after"]);
}

#[test]
fn test_repeat_query_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("app-2024-01-15.log"),
        [
            tagged_line("2024-01-15T08:00:00Z", "X", "a"),
            tagged_line("2024-01-15T09:00:00Z", "X", "b"),
        ]
        .join("\n"),
    )
    .unwrap();

    let catalog = FileCatalog::new(dir.path());
    let first = query_by_correlation_id(&catalog, "X").unwrap();
    let second = query_by_correlation_id(&catalog, "X").unwrap();
    assert_eq!(first, second);
}
