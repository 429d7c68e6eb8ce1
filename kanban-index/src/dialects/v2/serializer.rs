//! V2 serialization (document -> comrak table AST -> markdown)

use crate::dialects::common::{alloc, escape_text, render, task_link_node};
use crate::error::IndexError;
use crate::model::{Columns, IndexDocument};
use comrak::nodes::{AstNode, NodeTable, NodeValue, TableAlignment};
use comrak::Arena;

/// Render the v2 body: title, description, then the column table
pub fn serialize_body(doc: &IndexDocument) -> Result<String, IndexError> {
    if doc.columns.is_empty() {
        return Err(IndexError::TableFormat(
            "a board without columns cannot be written as a table".to_string(),
        ));
    }

    let arena = Arena::new();
    let root = build_table_document(&arena, &doc.columns);

    let table = render(root)?;

    let mut body = format!("# {}\n\n", heading_text(doc.name.trim())?);
    let description = doc.description.trim();
    if !description.is_empty() {
        body.push_str(&escape_text(description)?);
        body.push_str("\n\n");
    }
    body.push_str(table.trim_end());
    body.push('\n');
    Ok(body)
}

/// Escaped heading content; a trailing `#` is escaped so it is not read as
/// a closing sequence
fn heading_text(name: &str) -> Result<String, IndexError> {
    let mut text = escape_text(name)?;
    if text.ends_with('#') && !text.ends_with("\\#") {
        text.insert(text.len() - 1, '\\');
    }
    Ok(text)
}

/// Document holding a single table: a header row of column names, then
/// rows zipped across columns up to the longest one
fn build_table_document<'a>(arena: &'a Arena<AstNode<'a>>, columns: &Columns) -> &'a AstNode<'a> {
    let width = columns.len();
    let depth = columns.values().map(Vec::len).max().unwrap_or(0);
    let filled = columns.values().map(Vec::len).sum::<usize>() + width;

    let root = alloc(arena, NodeValue::Document);
    let table = alloc(
        arena,
        NodeValue::Table(NodeTable {
            alignments: vec![TableAlignment::None; width],
            num_columns: width,
            num_rows: depth + 1,
            num_nonempty_cells: filled,
        }),
    );
    root.append(table);

    let header = alloc(arena, NodeValue::TableRow(true));
    table.append(header);
    for name in columns.keys() {
        let cell = alloc(arena, NodeValue::TableCell);
        cell.append(alloc(arena, NodeValue::Text(name.clone())));
        header.append(cell);
    }

    for index in 0..depth {
        let row = alloc(arena, NodeValue::TableRow(false));
        table.append(row);
        for tasks in columns.values() {
            let cell = alloc(arena, NodeValue::TableCell);
            if let Some(task) = tasks.get(index) {
                cell.append(task_link_node(arena, task));
            }
            row.append(cell);
        }
    }

    root
}
