//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `keyrelay.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use keyrelay_adapter_http_reqwest::HttpConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule document settings.
    pub rules: RulesConfig,
    /// Shared HTTP client settings.
    pub http: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Rule document location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Path of the XML rule document, relative to the working directory.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("KEYRELAY_RULES") {
            self.rules.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("KEYRELAY_HTTP_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.http.timeout_secs = Some(secs);
            }
        }
        if let Some(val) = lookup("KEYRELAY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "rules path must not be empty".to_string(),
            ));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "http timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the rule document path.
    #[must_use]
    pub fn rules_path(&self) -> &Path {
        &self.rules.path
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./rules.xml"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "keyrelayd=info,keyrelay=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
