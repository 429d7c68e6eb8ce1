//! Table dialect (`indexVersion: 2`)
//!
//! ```markdown
//! # Project board
//!
//! Work for the spring release.
//!
//! | Todo                                | Doing                             |
//! | ----------------------------------- | --------------------------------- |
//! | [write-docs](tasks/write-docs.md)   | [fix-login](tasks/fix-login.md)   |
//! | [add-search](tasks/add-search.md)   |                                   |
//! ```
//!
//! The first level-one heading names the board and the paragraph right after
//! it is the description. The first table holds the columns: header cells
//! name them and every link in a body cell is a task of that cell's column,
//! read top to bottom. A cell may hold several links.
//!
//! Unlike v1 there is no `Options` section; options only come from front
//! matter.
//!
//! # Library Choice
//!
//! Both directions go through `comrak`'s typed AST with the GFM table
//! extension enabled. The table is built as `Table`/`TableRow`/`TableCell`
//! nodes and rendered with `format_commonmark`. The heading and description
//! are rendered through comrak as well, so markup characters in them are
//! escaped and read back as text.

pub mod parser;
pub mod serializer;

use crate::dialect::Dialect;
use crate::error::IndexError;
use crate::model::IndexDocument;
use crate::options::{IndexVersion, Options};

pub struct V2;

impl Dialect for V2 {
    fn version(&self) -> IndexVersion {
        IndexVersion::V2
    }

    fn description(&self) -> &str {
        "Single GFM table with one column per board column"
    }

    fn parse(&self, body: &str, options: Options) -> Result<IndexDocument, IndexError> {
        parser::parse_body(body, options)
    }

    fn serialize(&self, doc: &IndexDocument) -> Result<String, IndexError> {
        serializer::serialize_body(doc)
    }
}
