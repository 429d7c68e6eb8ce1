//! Error types for index conversion

use std::fmt;
use thiserror::Error;

/// A single schema violation reported by the options or column validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending value, e.g. `instance/sprints/0`
    pub property: String,
    pub message: String,
}

impl Violation {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Violation {
            property: property.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property, self.message)
    }
}

/// Errors raised by a single stage of parsing or building an index
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
    /// Front matter is present but is not a YAML mapping
    #[error("front matter must be a mapping: {0}")]
    FrontMatter(String),

    /// No heading precedes the document content
    #[error("data is missing a name heading")]
    MissingName,

    /// Options or the column map fail schema validation
    #[error("{}", format_violations(.violations))]
    Schema { violations: Vec<Violation> },

    /// A v1 column section does not hold a bullet list
    #[error("column \"{column}\" must contain a list")]
    SectionFormat { column: String },

    /// A column title that the v1 reader would take for the `Options` section
    #[error("column \"{column}\" cannot be written: the title is reserved for embedded options")]
    ReservedColumn { column: String },

    /// comrak failed to render a markdown tree
    #[error("unable to render markdown: {0}")]
    Render(String),

    /// The v2 column table is missing or malformed
    #[error("{0}")]
    TableFormat(String),

    /// The v1 `Options` section is not a YAML mapping
    #[error("invalid options section: {0}")]
    Yaml(String),
}

impl IndexError {
    pub fn schema(violations: Vec<Violation>) -> Self {
        IndexError::Schema { violations }
    }

    pub fn section_format(column: impl Into<String>) -> Self {
        IndexError::SectionFormat {
            column: column.into(),
        }
    }

    /// Violations carried by a schema error, empty for every other kind
    pub fn violations(&self) -> &[Violation] {
        match self {
            IndexError::Schema { violations } => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    let mut message = String::from("invalid options:");
    for violation in violations {
        message.push_str("\n  ");
        message.push_str(&violation.to_string());
    }
    message
}

/// Top-level error returned by [`crate::parse`] and [`crate::serialize`]
///
/// The stage prefix tells the caller which direction failed; the wrapped
/// [`IndexError`] says why.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unable to parse index: {0}")]
    Parse(#[source] IndexError),

    #[error("Unable to build index: {0}")]
    Build(#[source] IndexError),
}

impl ConvertError {
    pub fn kind(&self) -> &IndexError {
        match self {
            ConvertError::Parse(kind) | ConvertError::Build(kind) => kind,
        }
    }
}
