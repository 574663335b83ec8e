//! Tool configuration loaded from TOML
//!
//! Every field has a default, so an empty or partial file is valid. CLI flags
//! take precedence over anything set here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::config::{Strategy, DEFAULT_NAMING_PATTERN};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (error, warn, info, debug, trace)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_level() }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Defaults applied to every grouping run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingDefaults {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_naming_pattern")]
    pub naming_pattern: String,
}

impl Default for GroupingDefaults {
    fn default() -> Self {
        GroupingDefaults {
            strategy: Strategy::default(),
            naming_pattern: default_naming_pattern(),
        }
    }
}

fn default_naming_pattern() -> String {
    DEFAULT_NAMING_PATTERN.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub grouping: GroupingDefaults,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        Config::from_toml_str(&text)
    }

    /// Loads `path` when given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }
}
