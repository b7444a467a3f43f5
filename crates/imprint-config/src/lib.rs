//! Configuration for the imprint variant expansion engine.
//!
//! Load engine configuration from TOML or YAML files to control how
//! internal-consistency faults surface and how large a cartesian product the
//! engine is willing to enumerate, without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use imprint_config::{EnvironmentMode, ExpansionConfig};
//!
//! let config = ExpansionConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     combination_limit = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.combination_limit, Some(5000));
//! ```
//!
//! Use the default config when no file is present:
//!
//! ```
//! use imprint_config::ExpansionConfig;
//!
//! let config = ExpansionConfig::load("imprint.toml").unwrap_or_default();
//! assert!(config.combination_limit.is_some());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default cap on combinations enumerated per root.
const DEFAULT_COMBINATION_LIMIT: u64 = 100_000;

fn default_combination_limit() -> Option<u64> {
    Some(DEFAULT_COMBINATION_LIMIT)
}

/// Main engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExpansionConfig {
    /// Environment mode controlling how internal-consistency faults surface.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Cap on the number of combinations enumerated per root. `None`
    /// disables the guard.
    #[serde(default = "default_combination_limit")]
    pub combination_limit: Option<u64>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            combination_limit: default_combination_limit(),
        }
    }
}

impl ExpansionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the combination limit.
    pub fn with_combination_limit(mut self, limit: u64) -> Self {
        self.combination_limit = Some(limit);
        self
    }

    /// Disables the combination limit entirely.
    pub fn without_combination_limit(mut self) -> Self {
        self.combination_limit = None;
        self
    }

    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the combination limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combination_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "combination_limit must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Production mode: internal-consistency faults are logged and the
    /// generated output is kept (best effort, never dropping entries).
    #[default]
    Production,

    /// Fast assert mode: cheap invariants are checked; faults are logged.
    FastAssert,

    /// Full assert mode: internal-consistency faults are returned as errors.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true when internal invariants should be verified.
    pub fn assertions_enabled(&self) -> bool {
        matches!(self, Self::FastAssert | Self::FullAssert)
    }

    /// Returns true when a detected fault should fail the invocation instead
    /// of being logged.
    pub fn fail_fast(&self) -> bool {
        matches!(self, Self::FullAssert)
    }
}
