//! Helpers shared by both dialects

use crate::error::IndexError;
use comrak::nodes::{Ast, AstNode, NodeLink, NodeValue};
use comrak::{format_commonmark, Arena, ComrakOptions};
use std::cell::RefCell;

/// Directory task links point into
pub const TASKS_DIR: &str = "tasks";

/// Link target for a task id, `tasks/<id>.md`
pub fn task_href(task_id: &str) -> String {
    format!("{TASKS_DIR}/{task_id}.md")
}

/// Markdown link for a task, `[id](tasks/id.md)`
///
/// The link is rendered by comrak so markup characters in the id are
/// escaped and the link text reads back as the same id.
pub fn task_link(task_id: &str) -> Result<String, IndexError> {
    let arena = Arena::new();
    let paragraph = alloc(&arena, NodeValue::Paragraph);
    paragraph.append(task_link_node(&arena, task_id));
    render_inline(&arena, paragraph)
}

/// `Link` node whose text is the task id
pub fn task_link_node<'a>(arena: &'a Arena<AstNode<'a>>, task_id: &str) -> &'a AstNode<'a> {
    let link = alloc(
        arena,
        NodeValue::Link(NodeLink {
            url: task_href(task_id),
            title: String::new(),
        }),
    );
    link.append(alloc(arena, NodeValue::Text(task_id.to_string())));
    link
}

/// Inline markdown whose text content is `text`
///
/// Each line becomes a text node and line ends become soft breaks.
pub fn escape_text(text: &str) -> Result<String, IndexError> {
    let arena = Arena::new();
    let paragraph = alloc(&arena, NodeValue::Paragraph);
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            paragraph.append(alloc(&arena, NodeValue::SoftBreak));
        }
        paragraph.append(alloc(&arena, NodeValue::Text(line.trim().to_string())));
    }
    render_inline(&arena, paragraph)
}

pub fn alloc<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

/// Render a comrak tree as CommonMark
pub fn render<'a>(root: &'a AstNode<'a>) -> Result<String, IndexError> {
    let mut output = Vec::new();
    format_commonmark(root, &comrak_options(), &mut output)
        .map_err(|e| IndexError::Render(e.to_string()))?;
    String::from_utf8(output).map_err(|e| IndexError::Render(e.to_string()))
}

fn render_inline<'a>(
    arena: &'a Arena<AstNode<'a>>,
    paragraph: &'a AstNode<'a>,
) -> Result<String, IndexError> {
    let root = alloc(arena, NodeValue::Document);
    root.append(paragraph);
    let output = render(root)?;
    Ok(output.trim_end_matches('\n').to_string())
}

/// CommonMark with the GFM extensions index documents rely on
pub fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Concatenated text of a node and its descendants
pub fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut output = String::new();
    push_text(node, &mut output);
    output
}

fn push_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak => output.push('\n'),
        NodeValue::LineBreak => output.push('\n'),
        _ => {
            for child in node.children() {
                push_text(child, output);
            }
        }
    }
}
