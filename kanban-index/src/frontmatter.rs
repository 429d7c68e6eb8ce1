//! YAML front matter extraction and rendering
//!
//! A front matter block is the first thing in the document and is fenced by a
//! pair of identical delimiter lines, either `---` or the legacy `= yaml =`:
//!
//! ```markdown
//! ---
//! indexVersion: 2
//! hiddenColumns: [Archive]
//! ---
//!
//! # Board
//! ```
//!
//! The block must decode to a mapping. An empty block is an empty mapping.

use crate::error::IndexError;
use crate::options::Options;
use serde_json::Value;

const DELIMITERS: [&str; 2] = ["---", "= yaml ="];

/// Options read from front matter plus the markdown that follows it
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    pub options: Options,
    pub body: &'a str,
}

/// Split `text` into front matter options and body
///
/// Text without a complete front matter block comes back unchanged with
/// empty options.
pub fn extract(text: &str) -> Result<FrontMatter<'_>, IndexError> {
    let Some((yaml, body)) = split_block(text) else {
        return Ok(FrontMatter {
            options: Options::new(),
            body: text,
        });
    };

    let options = parse_mapping(yaml).map_err(IndexError::FrontMatter)?;
    Ok(FrontMatter { options, body })
}

/// Render options as a `---` fenced block, or nothing when there are none
pub fn render(options: &Options) -> Result<String, IndexError> {
    if options.is_empty() {
        return Ok(String::new());
    }
    let yaml = serde_yaml_ng::to_string(options)
        .map_err(|e| IndexError::FrontMatter(format!("unable to dump options: {e}")))?;
    let yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml);
    Ok(format!("---\n{yaml}---\n"))
}

/// Decode a YAML document that must be a mapping (or empty)
pub(crate) fn parse_mapping(yaml: &str) -> Result<Options, String> {
    if yaml.trim().is_empty() {
        return Ok(Options::new());
    }
    let value: Value = serde_yaml_ng::from_str(yaml).map_err(|e| e.to_string())?;
    match value {
        Value::Object(map) => Ok(Options::from(map)),
        Value::Null => Ok(Options::new()),
        other => Err(format!("expected a mapping, found {}", value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Returns (yaml, body) when `text` opens with a closed front matter block
fn split_block(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    let delimiter = DELIMITERS
        .iter()
        .find(|d| opening.trim_end() == **d)?;

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == *delimiter {
            let yaml = &text[yaml_start..offset];
            let body = &text[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}
