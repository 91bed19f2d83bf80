//! Configuration loaded from an optional YAML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CrumbsError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CRUMBS_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = ".crumbs.yaml";

/// How trails and resolutions are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable lines.
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format; `--json` overrides it.
    pub output: OutputFormat,
    /// Extra first path segments that are never treated as shorthand
    /// namespaces.
    pub reserved_prefixes: Vec<String>,
    /// Logging setup.
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Emit JSON log lines instead of text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "warn".to_string(), json: false }
    }
}

impl Config {
    /// Path of the config file to use, if any.
    ///
    /// `CRUMBS_CONFIG` wins; otherwise `.crumbs.yaml` in the working
    /// directory is used when it exists.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Loads the config file located by [`Config::config_path`], falling
    /// back to defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a located file cannot be read or parsed.
    pub fn load() -> Result<Self, CrumbsError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, CrumbsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CrumbsError::ConfigRead { path: path.to_path_buf(), source })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|source| CrumbsError::ConfigParse { path: path.to_path_buf(), source })
    }
}
