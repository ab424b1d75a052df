use crate::cli::OutputFormat;
use crate::query::{FieldOption, StringifyOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse field options '{path}': {source}")]
    Options {
        path: String,
        #[source]
        source: json5::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Free-form label for the loaded profile.
    pub profile_name: String,
    pub serializer: StringifyOptions,
    pub output: OutputRules,
    /// Field metadata used to resolve types and predefined values.
    pub fields: Vec<FieldOption>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            profile_name: "base".to_string(),
            serializer: StringifyOptions::default(),
            output: OutputRules::default(),
            fields: Vec::new(),
        }
    }
}

impl QueryConfig {
    /// Append field options, keeping the first declaration of any path
    pub fn extend_fields(&mut self, fields: Vec<FieldOption>) {
        for field in fields {
            if self.fields.iter().any(|known| known.path == field.path) {
                debug!(path = %field.path, "ignoring duplicate field option");
                continue;
            }
            self.fields.push(field);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputRules {
    pub format: Option<OutputFormat>,
}

pub fn load_config(path: Option<&Path>) -> Result<QueryConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<QueryConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = read(path)?;

    let config = toml::from_str::<QueryConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display.clone(),
        source,
    })?;
    debug!(path = %path_display, fields = config.fields.len(), "loaded config");
    Ok(config)
}

/// Load a field option list from a JSON or JSON5 file
pub fn load_field_options(path: &Path) -> Result<Vec<FieldOption>, ConfigError> {
    let raw = read(path)?;
    json5::from_str::<Vec<FieldOption>>(&raw).map_err(|source| ConfigError::Options {
        path: path.display().to_string(),
        source,
    })
}

pub fn default_config() -> &'static QueryConfig {
    static DEFAULT_CONFIG: LazyLock<QueryConfig> = LazyLock::new(QueryConfig::default);
    &DEFAULT_CONFIG
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })
}
