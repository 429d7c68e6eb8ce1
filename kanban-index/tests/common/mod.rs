//! Shared helpers for the integration tests

use kanban_index::{IndexDocument, Options};
use serde_json::Value;
use std::path::PathBuf;

/// Read a file from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Options from a JSON object literal
pub fn options(value: Value) -> Options {
    match value {
        Value::Object(map) => Options::from(map),
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Column names of a document, in order
pub fn column_names(doc: &IndexDocument) -> Vec<&str> {
    doc.columns.keys().map(String::as_str).collect()
}
