//! Export tests for the v2 dialect (document -> markdown table)

use crate::common::options;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, ComrakOptions};
use kanban_index::{parse, serialize, IndexDocument};
use serde_json::json;

fn v2_board() -> IndexDocument {
    IndexDocument::new("Board")
        .with_description("Table layout.")
        .with_options(options(json!({ "indexVersion": 2 })))
        .with_column("Todo", ["a", "b", "c"])
        .with_column("Doing", ["d"])
        .with_column("Done", Vec::<String>::new())
}

#[test]
fn test_export_builds_gfm_table() {
    let output = serialize(&v2_board()).unwrap();
    assert!(output.starts_with("---\nindexVersion: 2\n---\n\n# Board\n\nTable layout.\n\n"));

    let arena = Arena::new();
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    let root = parse_document(&arena, &output, &options);

    let table = root
        .descendants()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .expect("output should contain a table");

    // Header plus one row per task of the longest column
    assert_eq!(table.children().count(), 4);
    match &table.data.borrow().value {
        NodeValue::Table(info) => assert_eq!(info.num_columns, 3),
        other => panic!("expected table, got {other:?}"),
    };
}

#[test]
fn test_export_reimports() {
    let doc = v2_board();
    let output = serialize(&doc).unwrap();
    assert_eq!(parse(&output).unwrap(), doc);
}

#[test]
fn test_export_without_columns_fails() {
    let doc = IndexDocument::new("Board").with_options(options(json!({ "indexVersion": 2 })));
    let err = serialize(&doc).unwrap_err();
    assert!(err.to_string().contains("without columns"));
}

#[test]
fn test_markup_in_title_and_tasks_round_trips() {
    let doc = IndexDocument::new("*B* board")
        .with_description("Ship `v2` <soon>.")
        .with_options(options(json!({ "indexVersion": 2 })))
        .with_column("Todo", ["fix *urgent* bug", "a `b` c", "x]y", "<b>x</b>"]);

    let output = serialize(&doc).unwrap();
    assert_eq!(parse(&output).unwrap(), doc, "{output}");
}
