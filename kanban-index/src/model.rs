//! Canonical board model shared by both dialects

use crate::error::IndexError;
use crate::options::{IndexVersion, Options};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered column name -> ordered task ids
pub type Columns = IndexMap<String, Vec<String>>;

/// An index document: board title, description, options and columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub columns: Columns,
}

impl IndexDocument {
    pub fn new(name: impl Into<String>) -> Self {
        IndexDocument {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Append a column, replacing the tasks of an existing column of the same name
    pub fn with_column<I, S>(mut self, name: impl Into<String>, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .insert(name.into(), tasks.into_iter().map(Into::into).collect());
        self
    }

    /// Dialect selected by this document's options
    pub fn version(&self) -> Result<IndexVersion, IndexError> {
        self.options.index_version()
    }

    /// Every task id on the board, column by column
    pub fn task_ids(&self) -> Vec<&str> {
        self.columns
            .values()
            .flat_map(|tasks| tasks.iter().map(String::as_str))
            .collect()
    }

    pub fn find_task_column(&self, task_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t == task_id))
            .map(|(column, _)| column.as_str())
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.find_task_column(task_id).is_some()
    }
}
