//! Heading-and-list dialect (`indexVersion: 1`)
//!
//! ~~~markdown
//! # Project board
//!
//! Work for the spring release.
//!
//! ## Options
//!
//! ```yaml
//! startedColumns: [Doing]
//! ```
//!
//! ## Todo
//!
//! - [write-docs](tasks/write-docs.md)
//!
//! ## Doing
//!
//! - [fix-login](tasks/fix-login.md)
//! ~~~
//!
//! The first heading names the board and its content is the description. A
//! section titled `Options` holds YAML merged over the front matter. Every
//! other section is a column whose content is a flat bullet list of task
//! links; an unlinked item contributes its plain text as the task id.
//!
//! Options are always written back as front matter, never as an `Options`
//! section.

pub mod parser;
pub mod sections;
pub mod serializer;

use crate::dialect::Dialect;
use crate::error::IndexError;
use crate::model::IndexDocument;
use crate::options::{IndexVersion, Options};

/// Title of the section holding embedded options
pub const OPTIONS_SECTION: &str = "Options";

pub struct V1;

impl Dialect for V1 {
    fn version(&self) -> IndexVersion {
        IndexVersion::V1
    }

    fn description(&self) -> &str {
        "Heading per column with a bullet list of task links"
    }

    fn parse(&self, body: &str, options: Options) -> Result<IndexDocument, IndexError> {
        parser::parse_body(body, options)
    }

    fn serialize(&self, doc: &IndexDocument) -> Result<String, IndexError> {
        serializer::serialize_body(doc)
    }
}
