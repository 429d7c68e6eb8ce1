//! Kanban index documents
//!
//!     A board is described by a single markdown file, the index. It names the board, carries
//!     the board options and lists which tasks sit in which column. This crate converts that
//!     file into an [`IndexDocument`] and back.
//!
//!     This is a pure lib: no file I/O, no printing, no environment lookups. The CLI in
//!     kanban-cli is the shell around it.
//!
//! Architecture
//!
//!     parse(text)
//!         -> frontmatter::extract        options + body
//!         -> options.index_version()     pick the dialect once
//!         -> dialects::{v1,v2}::parse    name, description, columns
//!         -> schema::validate_options    every violation at once
//!
//!     serialize(doc)
//!         -> schema::validate_options / validate_columns
//!         -> frontmatter::render         omitted when there are no options
//!         -> dialects::{v1,v2}::serialize
//!
//!     The file structure :
//!     .
//!     ├── convert.rs              # parse / serialize entry points
//!     ├── dialect.rs              # Dialect trait definition
//!     ├── dialects
//!     │   ├── common.rs           # task links, comrak options, text collection
//!     │   ├── v1                  # headings + bullet lists
//!     │   └── v2                  # one GFM table
//!     ├── error.rs
//!     ├── frontmatter.rs
//!     ├── model.rs                # IndexDocument
//!     ├── options.rs              # Options, IndexVersion, typed view
//!     └── schema.rs               # options and column schemas
//!
//! Dialects
//!
//!     The dialect is chosen solely by the `indexVersion` option (1 when absent). There is no
//!     sniffing of the document shape. Task references are always `[id](tasks/id.md)`; only the
//!     link text is model state, the target is rebuilt on write.
//!
//! Library Choices
//!
//!     Markdown is never tokenized by hand beyond the v1 heading scan: lists, tables and links
//!     come from `comrak`'s AST, YAML from `serde_yaml_ng`, and schema checks from `jsonschema`.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── v1/                     # heading + list dialect
//!     ├── v2/                     # table dialect
//!     ├── options.rs              # schema aggregation and precedence
//!     └── round_trip.rs           # property tests over both dialects
//!
pub mod convert;
pub mod dialect;
pub mod dialects;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod options;
pub mod schema;

pub use convert::{convert, parse, serialize, serialize_with, SerializeOptions};
pub use dialect::Dialect;
pub use error::{ConvertError, IndexError, Violation};
pub use model::{Columns, IndexDocument};
pub use options::{IndexVersion, Options, OptionsConfig};
