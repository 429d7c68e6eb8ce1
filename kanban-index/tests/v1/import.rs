//! Import tests for the v1 dialect (markdown -> document)

use crate::common::{column_names, fixture};
use kanban_index::{parse, ConvertError, IndexError, IndexVersion};
use serde_json::json;

#[test]
fn test_fixture_board() {
    let doc = parse(&fixture("board-v1.md")).expect("fixture should parse");

    assert_eq!(doc.name, "Spring release");
    assert_eq!(
        doc.description,
        "Everything we want to ship before the\nend of the quarter."
    );
    assert_eq!(doc.version(), Ok(IndexVersion::V1));
    assert_eq!(column_names(&doc), vec!["Backlog", "Todo", "Doing", "Done"]);
    assert_eq!(doc.columns["Doing"], vec!["fix-login", "rate-limits"]);
    assert!(doc.columns["Done"].is_empty());
}

#[test]
fn test_fixture_options_merge() {
    let doc = parse(&fixture("board-v1.md")).unwrap();

    assert_eq!(doc.options.get("defaultTaskWorkload"), Some(&json!(2)));
    assert_eq!(doc.options.started_columns(), vec!["Doing"]);

    let config = doc.options.config().expect("typed options");
    assert_eq!(config.sprints.len(), 1);
    assert_eq!(config.sprints[0].start, "2021-03-01");
    assert_eq!(config.sprints[0].description.as_deref(), Some("Kick-off"));
    assert_eq!(config.task_workload_tags["Huge"], 8.0);
}

#[test]
fn test_column_list_order() {
    let md = "# Board\n\n## Doing\n- [T1](tasks/T1.md)\n- [T2](tasks/T2.md)\n";
    let doc = parse(md).unwrap();
    assert_eq!(doc.columns["Doing"], vec!["T1", "T2"]);
}

#[test]
fn test_embedded_options_take_precedence() {
    let md = "---\ndefaultTaskWorkload: 1\n---\n# Board\n\n## Options\n\ndefaultTaskWorkload: 2\n\n## Todo\n";
    let doc = parse(md).unwrap();
    assert_eq!(doc.options.get("defaultTaskWorkload"), Some(&json!(2)));
}

#[test]
fn test_legacy_yaml_delimiter() {
    let md = "= yaml =\nhiddenColumns: [Archive]\n= yaml =\n# Board\n\n## Archive\n";
    let doc = parse(md).unwrap();
    assert_eq!(doc.options.hidden_columns(), vec!["Archive"]);
    assert!(doc.columns.contains_key("Archive"));
}

#[test]
fn test_missing_name_heading() {
    let err = parse("Just some text\n\n## Todo\n- [a](tasks/a.md)\n").unwrap_err();
    assert_eq!(err, ConvertError::Parse(IndexError::MissingName));
    assert!(err.to_string().contains("missing a name heading"));
}

#[test]
fn test_column_must_be_a_list() {
    let err = parse("# Board\n\n## Todo\n\nWe will get to it.\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to parse index: column \"Todo\" must contain a list"
    );
}

#[test]
fn test_front_matter_must_be_a_mapping() {
    let err = parse("---\njust a string\n---\n# Board\n").unwrap_err();
    assert!(matches!(err.kind(), IndexError::FrontMatter(_)));
}

#[test]
fn test_unknown_option_keys_are_kept() {
    let doc = parse("---\nboardColor: teal\n---\n# Board\n").unwrap();
    assert_eq!(doc.options.get("boardColor"), Some(&json!("teal")));
}
