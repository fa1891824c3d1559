//! `dbgen.toml` configuration.
//!
//! Every key is optional; a missing file section falls back to defaults.

use dbgen_schema::TAG_KEY;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Conventional config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "dbgen.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub annotations: AnnotationConfig,
    pub types: TypeConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, else `dbgen.toml` in `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let namespace = &self.annotations.namespace;
        if namespace.is_empty() {
            return Err(ConfigError::Invalid("annotation namespace is empty".to_string()));
        }
        if namespace.contains(':') || namespace.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "annotation namespace '{namespace}' must not contain ':' or whitespace"
            )));
        }

        if let Some(name) = self.types.timestamp.iter().find(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "timestamp type name '{name}' is empty"
            )));
        }

        if self.output.suffix.is_empty() {
            return Err(ConfigError::Invalid("output suffix is empty".to_string()));
        }

        Ok(())
    }
}

///
/// AnnotationConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotationConfig {
    pub namespace: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            namespace: TAG_KEY.to_string(),
        }
    }
}

///
/// TypeConfig
///
/// Type paths (generic arguments stripped) treated as calendar timestamps.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeConfig {
    pub timestamp: Vec<String>,
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self {
            timestamp: [
                "chrono::DateTime",
                "chrono::NaiveDateTime",
                "DateTime",
                "NaiveDateTime",
            ]
            .map(ToString::to_string)
            .to_vec(),
        }
    }
}

impl TypeConfig {
    #[must_use]
    pub fn is_timestamp(&self, path: &str) -> bool {
        self.timestamp.iter().any(|name| name == path)
    }
}

///
/// OutputConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory under the output root.
    pub dir: PathBuf,
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("gen/dto"),
            suffix: ".gen.rs".to_string(),
        }
    }
}

impl OutputConfig {
    /// Output file name for an entity discriminator.
    #[must_use]
    pub fn file_name(&self, entity_type: &str) -> String {
        format!("{entity_type}{}", self.suffix)
    }
}

///
/// TESTS
///
