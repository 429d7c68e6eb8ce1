//! V1 parsing (sections -> document)

use super::sections::{split_sections, Section, RAW_SECTION};
use super::OPTIONS_SECTION;
use crate::dialects::common::{collect_text, comrak_options};
use crate::error::IndexError;
use crate::frontmatter::parse_mapping;
use crate::model::IndexDocument;
use crate::options::Options;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};

/// Parse a v1 body into a document, merging any `Options` section over `options`
pub fn parse_body(body: &str, mut options: Options) -> Result<IndexDocument, IndexError> {
    let mut sections = split_sections(body).into_iter();

    let title = match sections.next() {
        Some(section) if section.name != RAW_SECTION && !section.name.is_empty() => section,
        _ => return Err(IndexError::MissingName),
    };

    let mut doc = IndexDocument::new(title.name).with_description(title.content.trim());

    for section in sections {
        if section.name == OPTIONS_SECTION {
            options.merge(parse_options_section(&section.content)?);
            continue;
        }
        let tasks = parse_column(&section)?;
        tracing::trace!(column = %section.name, tasks = tasks.len(), "parsed column");
        doc.columns.insert(section.name, tasks);
    }

    doc.options = options;
    Ok(doc)
}

/// Read the YAML held by an `Options` section, fenced or bare
fn parse_options_section(content: &str) -> Result<Options, IndexError> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &comrak_options());

    let fenced = root.children().find_map(|node| match &node.data.borrow().value {
        NodeValue::CodeBlock(block) if block.fenced => Some(block.literal.clone()),
        _ => None,
    });

    let yaml = fenced.as_deref().unwrap_or(content);
    parse_mapping(yaml).map_err(IndexError::Yaml)
}

/// Task ids listed in a column section
fn parse_column(section: &Section) -> Result<Vec<String>, IndexError> {
    if section.content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let arena = Arena::new();
    let root = parse_document(&arena, &section.content, &comrak_options());
    let not_a_list = || IndexError::section_format(&section.name);

    let mut blocks = root.children();
    let list = blocks.next().ok_or_else(not_a_list)?;
    if blocks.next().is_some() || !is_bullet_list(list) {
        return Err(not_a_list());
    }

    let mut tasks = Vec::new();
    for item in list.children() {
        if let Some(task) = item_task(item).ok_or_else(not_a_list)? {
            tasks.push(task);
        }
    }
    Ok(tasks)
}

fn is_bullet_list<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(&node.data.borrow().value, NodeValue::List(list) if matches!(list.list_type, ListType::Bullet))
}

/// Task id of a list item; `None` when the item nests blocks other than
/// its paragraph, `Some(None)` for an empty item
fn item_task<'a>(item: &'a AstNode<'a>) -> Option<Option<String>> {
    let mut paragraph = None;
    for child in item.children() {
        match &child.data.borrow().value {
            NodeValue::Paragraph if paragraph.is_none() => paragraph = Some(child),
            _ => return None,
        }
    }

    let Some(paragraph) = paragraph else {
        return Some(None);
    };

    let link = paragraph
        .descendants()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Link(_)));
    let text = collect_text(link.unwrap_or(paragraph));
    let text = text.trim();
    Some((!text.is_empty()).then(|| text.to_string()))
}
