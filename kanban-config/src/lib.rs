//! Shared configuration loader for the kanban-index toolchain.
//!
//! `defaults/kanban.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`KanbanConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use kanban_index::SerializeOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/kanban.default.toml");

/// Top-level configuration consumed by kanban-index applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KanbanConfig {
    pub index: IndexConfig,
    pub serialize: SerializeConfig,
    pub logging: LoggingConfig,
}

/// Where to find the board when no input is given.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerializeConfig {
    pub ignore_options: bool,
}

impl From<SerializeConfig> for SerializeOptions {
    fn from(config: SerializeConfig) -> Self {
        SerializeOptions {
            ignore_options: config.ignore_options,
        }
    }
}

impl From<&SerializeConfig> for SerializeOptions {
    fn from(config: &SerializeConfig) -> Self {
        SerializeOptions {
            ignore_options: config.ignore_options,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `kanban_index=debug`
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KanbanConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KanbanConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.index.path, PathBuf::from(".kanbn/index.md"));
        assert!(!config.serialize.ignore_options);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("logging.filter", "kanban_index=trace")
            .expect("override to apply")
            .set_override("serialize.ignore_options", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.filter, "kanban_index=trace");
        assert!(config.serialize.ignore_options);
    }

    #[test]
    fn layers_files_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kanban.toml");
        fs::write(&path, "[index]\npath = \"board/index.md\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.index.path, PathBuf::from("board/index.md"));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does-not-exist/kanban.toml")
            .build()
            .unwrap();
        assert_eq!(config.index.path, PathBuf::from(".kanbn/index.md"));
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("does-not-exist/kanban.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn serialize_config_converts_to_serialize_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: SerializeOptions = (&config.serialize).into();
        assert_eq!(options, SerializeOptions::default());

        let options: SerializeOptions = SerializeConfig {
            ignore_options: true,
        }
        .into();
        assert!(options.ignore_options);
    }
}
