//! Dialect trait definition
//!
//! A dialect is one markdown layout of the same [`IndexDocument`]. Each
//! dialect turns the body that follows the front matter into a document and
//! renders a document back into a body. Front matter and schema validation are
//! handled once by the dispatcher in [`crate::convert`], never by a dialect.

use crate::error::IndexError;
use crate::model::IndexDocument;
use crate::options::{IndexVersion, Options};

pub trait Dialect: Send + Sync {
    /// Version that selects this dialect through `indexVersion`
    fn version(&self) -> IndexVersion;

    fn name(&self) -> &str {
        self.version().name()
    }

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// Build a document from the markdown body and the front matter options
    fn parse(&self, body: &str, options: Options) -> Result<IndexDocument, IndexError>;

    /// Render the markdown body (heading, description and columns)
    fn serialize(&self, doc: &IndexDocument) -> Result<String, IndexError>;
}
