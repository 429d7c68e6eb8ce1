//! Export tests for the v1 dialect (document -> markdown)

use crate::common::options;
use insta::assert_snapshot;
use kanban_index::{parse, serialize, IndexDocument, IndexError};
use serde_json::json;

#[test]
fn test_export_with_options() {
    let doc = IndexDocument::new("Project")
        .with_description("Spring release.")
        .with_options(options(json!({ "defaultTaskWorkload": 2 })))
        .with_column("Todo", ["write-docs", "add-search"])
        .with_column("Done", Vec::<String>::new());

    let output = serialize(&doc).unwrap();
    assert_snapshot!(output, @r"
    ---
    defaultTaskWorkload: 2
    ---

    # Project

    Spring release.

    ## Todo

    - [write-docs](tasks/write-docs.md)
    - [add-search](tasks/add-search.md)

    ## Done
    ");
}

#[test]
fn test_empty_options_emit_no_front_matter() {
    let doc = IndexDocument::new("Project").with_column("Todo", ["a"]);
    let output = serialize(&doc).unwrap();
    assert!(output.starts_with("# Project\n"));
    assert!(!output.contains("---"));
}

#[test]
fn test_export_reimports() {
    let doc = IndexDocument::new("Project")
        .with_description("Line one\nline two")
        .with_options(options(json!({
            "hiddenColumns": ["Archive"],
            "customFields": [{ "name": "Due", "type": "date" }]
        })))
        .with_column("Todo", ["a", "b"])
        .with_column("Archive", ["c"]);

    let output = serialize(&doc).unwrap();
    assert_eq!(parse(&output).unwrap(), doc);
}

#[test]
fn test_export_rejects_invalid_options() {
    let doc = IndexDocument::new("Project")
        .with_options(options(json!({ "views": [{ "filters": {} }] })))
        .with_column("Todo", ["a"]);
    let err = serialize(&doc).unwrap_err();
    assert!(err.to_string().starts_with("Unable to build index: "));
    assert_eq!(err.kind().violations().len(), 1);
}

#[test]
fn test_task_ids_with_markup_round_trip() {
    let ids = ["fix *urgent* bug", "a `b` c", "x]y", "<b>x</b>", "my task"];
    let doc = IndexDocument::new("Project").with_column("Todo", ids);

    let output = serialize(&doc).unwrap();
    assert_eq!(parse(&output).unwrap(), doc, "{output}");
}

#[test]
fn test_title_markup_is_kept_verbatim() {
    let doc = IndexDocument::new("*Project* board")
        .with_description("Ship `v2` <soon>.")
        .with_column("Todo", ["a"]);

    let output = serialize(&doc).unwrap();
    assert!(output.starts_with("# *Project* board\n"));
    assert_eq!(parse(&output).unwrap(), doc);
}

#[test]
fn test_options_column_is_not_written() {
    let doc = IndexDocument::new("Project")
        .with_column("Options", ["a"])
        .with_column("Todo", ["b"]);

    let err = serialize(&doc).unwrap_err();
    assert!(matches!(err.kind(), IndexError::ReservedColumn { .. }));
    assert!(err.to_string().starts_with("Unable to build index: column \"Options\""));
}
