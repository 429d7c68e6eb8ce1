//! Parse and build entry points
//!
//! Both directions resolve the dialect once from `indexVersion` and hand the
//! body to it. Every failure is reported with the stage that produced it.

use crate::dialects::dialect_for;
use crate::error::{ConvertError, IndexError};
use crate::frontmatter;
use crate::model::IndexDocument;
use crate::options::IndexVersion;
use crate::schema;

/// Knobs for [`serialize_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Skip schema validation of the document options
    pub ignore_options: bool,
}

/// Parse index markdown into a validated document
pub fn parse(text: &str) -> Result<IndexDocument, ConvertError> {
    parse_index(text).map_err(ConvertError::Parse)
}

/// Render a document as index markdown in the dialect its options select
pub fn serialize(doc: &IndexDocument) -> Result<String, ConvertError> {
    serialize_with(doc, &SerializeOptions::default())
}

pub fn serialize_with(
    doc: &IndexDocument,
    options: &SerializeOptions,
) -> Result<String, ConvertError> {
    build_index(doc, options).map_err(ConvertError::Build)
}

/// Re-render index markdown in another dialect
pub fn convert(text: &str, target: IndexVersion) -> Result<String, ConvertError> {
    let mut doc = parse(text)?;
    doc.options.set_index_version(target);
    serialize(&doc)
}

fn parse_index(text: &str) -> Result<IndexDocument, IndexError> {
    let front = frontmatter::extract(text)?;
    let version = front.options.index_version()?;
    tracing::debug!(%version, "parsing index");

    let doc = dialect_for(version).parse(front.body, front.options)?;
    schema::validate_options(&doc.options)?;

    tracing::debug!(
        name = %doc.name,
        columns = doc.columns.len(),
        tasks = doc.task_ids().len(),
        "parsed index"
    );
    Ok(doc)
}

fn build_index(doc: &IndexDocument, options: &SerializeOptions) -> Result<String, IndexError> {
    if !options.ignore_options {
        schema::validate_options(&doc.options)?;
    }
    schema::validate_columns(&doc.columns)?;
    if doc.name.trim().is_empty() {
        return Err(IndexError::MissingName);
    }

    let version = doc.version()?;
    tracing::debug!(%version, columns = doc.columns.len(), "building index");

    let front = frontmatter::render(&doc.options)?;
    let body = dialect_for(version).serialize(doc)?;

    if front.is_empty() {
        Ok(body)
    } else {
        Ok(format!("{front}\n{body}"))
    }
}
