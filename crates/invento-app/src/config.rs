//! Application configuration.
//!
//! Loaded in three steps: defaults, then an optional TOML or JSON file chosen
//! by extension, then `INVENTO_*` environment overrides. The result is
//! validated before use.

use invento_authentication::CredentialPolicy;
use invento_core::effects::storage::validate_key;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::views::DEFAULT_VIEW;

/// Storage key of the persisted session record.
pub const DEFAULT_SESSION_KEY: &str = "invento-user";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path}: {message}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// The file could not be parsed
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// The file extension is neither `toml` nor `json`
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// An environment override did not parse
    #[error("Invalid value in {var}: {message}")]
    Environment {
        /// Variable name
        var: &'static str,
        /// Underlying error
        message: String,
    },

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key of the persisted session
    pub session_key: String,
    /// Directory for the filesystem storage handler
    pub storage_dir: PathBuf,
    /// Simulated login round trip, in milliseconds
    pub login_delay_ms: u64,
    /// Minimum password length at login
    pub min_password_len: usize,
    /// View shown for unknown view ids
    pub default_view: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            storage_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("invento"),
            login_delay_ms: 1500,
            min_password_len: CredentialPolicy::default().min_password_len,
            default_view: DEFAULT_VIEW.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overlaid with `path` when it exists, then the process
    /// environment; validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::load_from_file(path)?,
            _ => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML or JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Apply `INVENTO_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        self.merge_with_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn merge_with_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("INVENTO_SESSION_KEY") {
            self.session_key = key;
        }
        if let Some(dir) = lookup("INVENTO_STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Some(delay) = lookup("INVENTO_LOGIN_DELAY_MS") {
            self.login_delay_ms = delay.parse().map_err(|_| ConfigError::Environment {
                var: "INVENTO_LOGIN_DELAY_MS",
                message: format!("`{delay}` is not a number of milliseconds"),
            })?;
        }
        if let Some(len) = lookup("INVENTO_MIN_PASSWORD_LEN") {
            self.min_password_len = len.parse().map_err(|_| ConfigError::Environment {
                var: "INVENTO_MIN_PASSWORD_LEN",
                message: format!("`{len}` is not a length"),
            })?;
        }
        if let Some(view) = lookup("INVENTO_DEFAULT_VIEW") {
            self.default_view = view;
        }
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_key(&self.session_key)
            .map_err(|e| ConfigError::Invalid(format!("session_key: {e}")))?;
        if self.min_password_len == 0 {
            return Err(ConfigError::Invalid(
                "min_password_len must be at least 1".to_string(),
            ));
        }
        if self.login_delay_ms > 60_000 {
            return Err(ConfigError::Invalid(
                "login_delay_ms cannot exceed one minute".to_string(),
            ));
        }
        if self.default_view.is_empty() {
            return Err(ConfigError::Invalid(
                "default_view cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Simulated login delay.
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Credential policy derived from this configuration.
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy {
            min_password_len: self.min_password_len,
            ..CredentialPolicy::default()
        }
    }
}
