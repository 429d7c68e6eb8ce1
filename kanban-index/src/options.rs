//! Board options carried in front matter or in the v1 `Options` section
//!
//! Options are kept as an ordered JSON object so that keys this crate does
//! not know about survive a parse/serialize round trip. [`Options::config`]
//! provides a typed view of the recognized keys once the object has passed
//! schema validation.

use crate::error::{IndexError, Violation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Key that selects the markdown dialect
pub const INDEX_VERSION_KEY: &str = "indexVersion";

/// Markdown dialect of an index document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IndexVersion {
    /// Heading-and-list layout
    #[default]
    V1,
    /// Single GFM table layout
    V2,
}

impl IndexVersion {
    pub fn as_number(self) -> u64 {
        match self {
            IndexVersion::V1 => 1,
            IndexVersion::V2 => 2,
        }
    }

    /// Short name used on the command line (`v1`, `v2`)
    pub fn name(self) -> &'static str {
        match self {
            IndexVersion::V1 => "v1",
            IndexVersion::V2 => "v2",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Some(IndexVersion::V1),
            "v2" | "2" => Some(IndexVersion::V2),
            _ => None,
        }
    }
}

impl fmt::Display for IndexVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered option object owned by an index document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn new() -> Self {
        Options(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Shallow merge: keys from `other` replace keys already present
    pub fn merge(&mut self, other: Options) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Resolve the dialect selected by `indexVersion` (absent means v1)
    pub fn index_version(&self) -> Result<IndexVersion, IndexError> {
        match self.0.get(INDEX_VERSION_KEY) {
            None | Some(Value::Null) => Ok(IndexVersion::V1),
            Some(value) => match value.as_u64() {
                Some(1) => Ok(IndexVersion::V1),
                Some(2) => Ok(IndexVersion::V2),
                _ => Err(IndexError::schema(vec![Violation::new(
                    format!("instance/{INDEX_VERSION_KEY}"),
                    format!("{value} is not one of [1,2]"),
                )])),
            },
        }
    }

    pub fn set_index_version(&mut self, version: IndexVersion) {
        self.0
            .insert(INDEX_VERSION_KEY.to_string(), Value::from(version.as_number()));
    }

    pub fn hidden_columns(&self) -> Vec<&str> {
        self.string_list("hiddenColumns")
    }

    pub fn started_columns(&self) -> Vec<&str> {
        self.string_list("startedColumns")
    }

    pub fn completed_columns(&self) -> Vec<&str> {
        self.string_list("completedColumns")
    }

    fn string_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Typed view over the recognized keys
    pub fn config(&self) -> Result<OptionsConfig, IndexError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| IndexError::schema(vec![Violation::new("instance", e.to_string())]))
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Options(map)
    }
}

/// Typed projection of the recognized option keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfig {
    #[serde(default)]
    pub hidden_columns: Vec<String>,
    #[serde(default)]
    pub started_columns: Vec<String>,
    #[serde(default)]
    pub completed_columns: Vec<String>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    pub default_task_workload: Option<f64>,
    #[serde(default)]
    pub task_workload_tags: IndexMap<String, f64>,
    #[serde(default)]
    pub column_sorting: IndexMap<String, Vec<Sorter>>,
    pub task_template: Option<String>,
    pub date_format: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub views: Vec<View>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    /// Start date as written in the document (`YYYY-MM-DD...`)
    pub start: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sorter {
    pub field: String,
    pub filter: Option<String>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    Boolean,
    String,
    Number,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateDate {
    Always,
    Once,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    pub update_date: Option<UpdateDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    pub filters: Option<Map<String, Value>>,
    #[serde(default)]
    pub columns: Vec<ViewColumn>,
    #[serde(default)]
    pub lanes: Vec<ViewLane>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewColumn {
    pub name: String,
    pub filters: Option<Map<String, Value>>,
    #[serde(default)]
    pub sorters: Vec<Sorter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewLane {
    pub name: String,
    pub filters: Option<Map<String, Value>>,
}
