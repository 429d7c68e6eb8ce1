//! Options and column schemas
//!
//! Both schemas are built once and compiled once; callers only ever see
//! shared references. Validation never stops at the first problem: every
//! violation is collected so a malformed index can be fixed in one pass.
//!
//! The pattern-keyed maps (`taskWorkloadTags`, `columnSorting` and the column
//! map) use `^[w ]+$`. That pattern matches only the letter `w` and spaces,
//! and because the schemas do not forbid additional properties, keys that do
//! not match it are left unchecked. This is the behavior existing index files
//! were written against, so it is kept as is.

use crate::error::{IndexError, Violation};
use crate::model::Columns;
use crate::options::Options;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Key pattern for the pattern-keyed option maps and the column map
pub const KEY_PATTERN: &str = "^[w ]+$";

/// Sprint start dates must open with an ISO calendar date
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}";

static OPTIONS_SCHEMA: Lazy<Value> = Lazy::new(build_options_schema);
static COLUMNS_SCHEMA: Lazy<Value> = Lazy::new(build_columns_schema);

static OPTIONS_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    jsonschema::validator_for(&OPTIONS_SCHEMA).expect("options schema compiles")
});
static COLUMNS_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    jsonschema::validator_for(&COLUMNS_SCHEMA).expect("columns schema compiles")
});

/// The JSON schema every options object is checked against
pub fn options_schema() -> &'static Value {
    &OPTIONS_SCHEMA
}

/// The JSON schema for the column map
pub fn columns_schema() -> &'static Value {
    &COLUMNS_SCHEMA
}

/// Validate board options, reporting every violation at once
pub fn validate_options(options: &Options) -> Result<(), IndexError> {
    let instance = Value::Object(options.as_map().clone());
    collect(&OPTIONS_VALIDATOR, &instance)
}

/// Validate a column map taken from the model
pub fn validate_columns(columns: &Columns) -> Result<(), IndexError> {
    let instance = serde_json::to_value(columns)
        .map_err(|e| IndexError::schema(vec![Violation::new("instance", e.to_string())]))?;
    validate_raw_columns(&instance)
}

/// Validate an untyped column map, e.g. one read from JSON
pub fn validate_raw_columns(columns: &Value) -> Result<(), IndexError> {
    collect(&COLUMNS_VALIDATOR, columns)
}

fn collect(validator: &Validator, instance: &Value) -> Result<(), IndexError> {
    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|error| Violation::new(format!("instance{}", error.instance_path), error.to_string()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = violations.len(), "schema validation failed");
        Err(IndexError::schema(violations))
    }
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn sorter() -> Value {
    json!({
        "type": "object",
        "properties": {
            "field": { "type": "string" },
            "filter": { "type": "string" },
            "order": { "type": "string", "enum": ["ascending", "descending"] }
        },
        "required": ["field"]
    })
}

fn build_options_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "hiddenColumns": string_array(),
            "startedColumns": string_array(),
            "completedColumns": string_array(),
            "sprints": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "start": { "type": "string", "pattern": DATE_PATTERN },
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["start", "name"]
                }
            },
            "defaultTaskWorkload": { "type": "number" },
            "taskWorkloadTags": {
                "type": "object",
                "patternProperties": {
                    KEY_PATTERN: { "type": "number" }
                }
            },
            "columnSorting": {
                "type": "object",
                "patternProperties": {
                    KEY_PATTERN: { "type": "array", "items": sorter() }
                }
            },
            "taskTemplate": { "type": "string" },
            "dateFormat": { "type": "string" },
            "customFields": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "type": {
                            "type": "string",
                            "enum": ["boolean", "string", "number", "date"]
                        },
                        "updateDate": {
                            "type": "string",
                            "enum": ["always", "once", "none"]
                        }
                    },
                    "required": ["name", "type"]
                }
            },
            "views": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "filters": { "type": "object" },
                        "columns": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "filters": { "type": "object" },
                                    "sorters": { "type": "array", "items": sorter() }
                                },
                                "required": ["name"]
                            }
                        },
                        "lanes": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "filters": { "type": "object" }
                                },
                                "required": ["name"]
                            }
                        }
                    },
                    "required": ["name"]
                }
            }
        }
    })
}

fn build_columns_schema() -> Value {
    json!({
        "type": "object",
        "patternProperties": {
            KEY_PATTERN: string_array()
        }
    })
}
