//! V2 parsing (comrak AST -> document)

use crate::dialects::common::{collect_text, comrak_options};
use crate::error::IndexError;
use crate::model::{Columns, IndexDocument};
use crate::options::Options;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};

/// Parse a v2 body into a document
pub fn parse_body(body: &str, options: Options) -> Result<IndexDocument, IndexError> {
    let arena = Arena::new();
    let root = parse_document(&arena, body, &comrak_options());

    let heading = root
        .children()
        .find(|node| is_title_heading(node))
        .ok_or(IndexError::MissingName)?;
    let name = collect_text(heading).trim().to_string();
    if name.is_empty() {
        return Err(IndexError::MissingName);
    }

    let description = heading
        .next_sibling()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Paragraph))
        .map(|node| collect_text(node).trim().to_string())
        .unwrap_or_default();

    let table = root
        .descendants()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .ok_or_else(|| IndexError::TableFormat("index is missing a column table".to_string()))?;

    let columns = read_table(table)?;
    tracing::trace!(columns = columns.len(), "parsed column table");

    Ok(IndexDocument {
        name,
        description,
        options,
        columns,
    })
}

fn is_title_heading<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(&node.data.borrow().value, NodeValue::Heading(heading) if heading.level == 1)
}

/// Header cells name the columns; body cells contribute their links
fn read_table<'a>(table: &'a AstNode<'a>) -> Result<Columns, IndexError> {
    let mut rows = table.children();
    let header = rows
        .next()
        .ok_or_else(|| IndexError::TableFormat("column table has no header row".to_string()))?;

    let mut columns = Columns::new();
    for (index, cell) in header.children().enumerate() {
        let name = collect_text(cell).trim().to_string();
        if name.is_empty() {
            return Err(IndexError::TableFormat(format!(
                "column table header {} is empty",
                index + 1
            )));
        }
        if columns.insert(name.clone(), Vec::new()).is_some() {
            return Err(IndexError::TableFormat(format!(
                "column \"{name}\" appears more than once in the table header"
            )));
        }
    }

    for row in rows {
        for (index, cell) in row.children().enumerate() {
            let Some((_, tasks)) = columns.get_index_mut(index) else {
                break;
            };
            tasks.extend(cell_tasks(cell));
        }
    }

    Ok(columns)
}

fn cell_tasks<'a>(cell: &'a AstNode<'a>) -> Vec<String> {
    cell.descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Link(_)))
        .map(|link| collect_text(link).trim().to_string())
        .filter(|task| !task.is_empty())
        .collect()
}
