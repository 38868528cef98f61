//! Client configuration.
//!
//! Values come from defaults, a JSON document, or `TODOLIST_*` environment
//! variables, and are validated before use.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the API base URL.
pub const ENV_API_URL: &str = "TODOLIST_API_URL";
/// Environment variable holding the durable store key.
pub const ENV_STORAGE_KEY: &str = "TODOLIST_STORAGE_KEY";
/// Environment variable holding the fallback id prefix.
pub const ENV_FALLBACK_PREFIX: &str = "TODOLIST_FALLBACK_PREFIX";
/// Environment variable holding the durable store directory.
pub const ENV_STORE_DIR: &str = "TODOLIST_STORE_DIR";
/// Environment variable holding the request timeout in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "TODOLIST_REQUEST_TIMEOUT_SECS";

/// Errors returned while building a [`ClientConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A field is empty after trimming.
    #[error("configuration field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// The API base URL is not an `http://` or `https://` URL.
    #[error("invalid API base URL '{0}', expected http:// or https://")]
    InvalidApiUrl(String),

    /// The request timeout is not a positive whole number of seconds.
    #[error("invalid request timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),

    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(String),
}

/// Settings for the todo list client.
///
/// # Examples
///
/// ```
/// use todolist::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.storage_key, "todo-app-tasks");
/// assert!(config.request_timeout().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the remote task API.
    pub api_base_url: String,
    /// Key the task list is stored under.
    pub storage_key: String,
    /// Prefix of client-minted fallback ids.
    pub fallback_id_prefix: String,
    /// Directory holding the durable store.
    pub store_dir: String,
    /// Request timeout; `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_owned(),
            storage_key: "todo-app-tasks".to_owned(),
            fallback_id_prefix: "task-".to_owned(),
            store_dir: ".todolist".to_owned(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from a key lookup, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a supplied value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_API_URL) {
            config.api_base_url = value;
        }
        if let Some(value) = lookup(ENV_STORAGE_KEY) {
            config.storage_key = value;
        }
        if let Some(value) = lookup(ENV_FALLBACK_PREFIX) {
            config.fallback_id_prefix = value;
        }
        if let Some(value) = lookup(ENV_STORE_DIR) {
            config.store_dir = value;
        }
        if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout_secs = Some(parse_timeout(&value)?);
        }
        config.validated()
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a supplied value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses a JSON configuration document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and other [`ConfigError`] variants for invalid values.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validated()
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = required("api_base_url", &self.api_base_url)?;
        self.storage_key = required("storage_key", &self.storage_key)?;
        self.fallback_id_prefix = required("fallback_id_prefix", &self.fallback_id_prefix)?;
        self.store_dir = required("store_dir", &self.store_dir)?;

        let has_valid_prefix = self.api_base_url.starts_with("http://")
            || self.api_base_url.starts_with("https://");
        if !has_valid_prefix {
            return Err(ConfigError::InvalidApiUrl(self.api_base_url));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout("0".to_owned()));
        }
        Ok(self)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ConfigError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(normalized.to_owned())
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
