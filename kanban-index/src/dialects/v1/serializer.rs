//! V1 serialization (document -> headings and lists)

use super::OPTIONS_SECTION;
use crate::dialects::common::task_link;
use crate::error::IndexError;
use crate::model::IndexDocument;

/// Render the v1 body: title, description, then one section per column
///
/// The title and description are written as given; the reader takes both
/// verbatim from the source. Task links go through comrak so that their text
/// is escaped.
pub fn serialize_body(doc: &IndexDocument) -> Result<String, IndexError> {
    if doc.columns.contains_key(OPTIONS_SECTION) {
        return Err(IndexError::ReservedColumn {
            column: OPTIONS_SECTION.to_string(),
        });
    }

    let mut blocks = vec![format!("# {}", doc.name.trim())];

    let description = doc.description.trim();
    if !description.is_empty() {
        blocks.push(description.to_string());
    }

    for (column, tasks) in &doc.columns {
        blocks.push(format!("## {column}"));
        if !tasks.is_empty() {
            blocks.push(render_list(tasks)?);
        }
    }

    let mut output = blocks.join("\n\n");
    output.push('\n');
    Ok(output)
}

fn render_list(tasks: &[String]) -> Result<String, IndexError> {
    let items = tasks
        .iter()
        .map(|task| task_link(task).map(|link| format!("- {link}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_columns_as_sections() {
        let doc = IndexDocument::new("Board")
            .with_description("About the board.")
            .with_column("Todo", ["a", "b"])
            .with_column("Done", Vec::<String>::new());
        let output = serialize_body(&doc).unwrap();
        assert_eq!(
            output,
            "# Board\n\nAbout the board.\n\n## Todo\n\n- [a](tasks/a.md)\n- [b](tasks/b.md)\n\n## Done\n"
        );
    }

    #[test]
    fn empty_description_is_omitted() {
        let doc = IndexDocument::new("Board").with_column("Todo", ["a"]);
        let output = serialize_body(&doc).unwrap();
        assert_eq!(output, "# Board\n\n## Todo\n\n- [a](tasks/a.md)\n");
    }

    #[test]
    fn options_column_is_refused() {
        let doc = IndexDocument::new("Board")
            .with_column("Options", ["a"])
            .with_column("Todo", ["b"]);
        let err = serialize_body(&doc).unwrap_err();
        assert_eq!(
            err,
            IndexError::ReservedColumn {
                column: "Options".to_string()
            }
        );
    }

    #[test]
    fn markup_in_task_ids_is_escaped() {
        let doc = IndexDocument::new("Board").with_column("Todo", ["fix *urgent* bug"]);
        let output = serialize_body(&doc).unwrap();
        assert!(output.contains("[fix \\*urgent\\* bug]"), "{output}");
    }
}
