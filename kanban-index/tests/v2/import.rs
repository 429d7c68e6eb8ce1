//! Import tests for the v2 dialect (markdown table -> document)

use crate::common::{column_names, fixture};
use kanban_index::{parse, IndexError, IndexVersion};

#[test]
fn test_fixture_board() {
    let doc = parse(&fixture("board-v2.md")).expect("fixture should parse");

    assert_eq!(doc.name, "Spring release");
    assert_eq!(doc.description, "Everything we want to ship.");
    assert_eq!(doc.version(), Ok(IndexVersion::V2));
    assert_eq!(column_names(&doc), vec!["Todo", "Doing", "Done", "Archive"]);
    assert_eq!(
        doc.columns["Todo"],
        vec!["write-docs", "add-search", "dark-mode"]
    );
    assert_eq!(doc.columns["Doing"], vec!["fix-login", "rate-limits"]);
    assert!(doc.columns["Done"].is_empty());
    assert_eq!(doc.options.hidden_columns(), vec!["Archive"]);
}

#[test]
fn test_table_cells() {
    let md = "---\nindexVersion: 2\n---\n# Board\n\n| Todo | Doing |\n| --- | --- |\n| [T1](tasks/T1.md) | |\n";
    let doc = parse(md).unwrap();
    assert_eq!(doc.columns["Todo"], vec!["T1"]);
    assert_eq!(doc.columns["Doing"], Vec::<String>::new());
}

#[test]
fn test_no_sniffing_without_index_version() {
    // Without indexVersion the table is read as v1, where it is leftover
    // content under the title heading.
    let md = "# Board\n\n| Todo |\n| --- |\n| [T1](tasks/T1.md) |\n";
    let doc = parse(md).unwrap();
    assert!(doc.columns.is_empty());
    assert!(doc.description.contains("| Todo |"));
}

#[test]
fn test_missing_table() {
    let err = parse("---\nindexVersion: 2\n---\n# Board\n\nNothing here.\n").unwrap_err();
    assert!(matches!(err.kind(), IndexError::TableFormat(_)));
    assert!(err.to_string().contains("missing a column table"));
}

#[test]
fn test_invalid_index_version() {
    let err = parse("---\nindexVersion: 3\n---\n# Board\n").unwrap_err();
    assert!(matches!(err.kind(), IndexError::Schema { .. }));
    assert!(err.to_string().contains("indexVersion"));
}
