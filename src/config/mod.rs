//! Configuration management for the sugarlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It configures where the reading log lives and
//! how the generation service is reached.
//!
//! # Environment Variables
//!
//! - `SUGARLOG_FILE`: Path to the reading log (defaults to ~/.sugarlog/blood_sugar_log.json)
//! - `GEMINI_API_KEY`: API key for the generation service (only needed by `ask`)
//! - `SUGARLOG_MODEL`: Model name (defaults to "gemini-2.0-flash")
//! - `SUGARLOG_API_URL`: Base URL of the generation API
//! - `SUGARLOG_TIMEOUT_SECS`: HTTP timeout in seconds (defaults to 30)
//! - `HOME`: Used for expanding the default log path

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOG_SUBPATH, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    ENV_VAR_GEMINI_API_KEY, ENV_VAR_HOME, ENV_VAR_SUGARLOG_API_URL, ENV_VAR_SUGARLOG_FILE,
    ENV_VAR_SUGARLOG_MODEL, ENV_VAR_SUGARLOG_TIMEOUT_SECS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the sugarlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use sugarlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     log_file: PathBuf::from("/data/blood_sugar_log.json"),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Path of the JSON document holding the reading log.
    pub log_file: PathBuf,

    /// API key for the generation service, if configured.
    pub api_key: Option<String>,

    /// Generation model name.
    pub model: String,

    /// Base URL of the generation API, without a trailing slash.
    pub api_base_url: String,

    /// Timeout for a single generation request.
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("log_file", &"[REDACTED_PATH]")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and an empty log path.
    fn default() -> Self {
        Config {
            log_file: PathBuf::from(""),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The log path is expanded with `shellexpand` so `~` and `$VAR` references work.
    /// Empty environment values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The log path expansion fails or yields an empty path
    /// - `SUGARLOG_TIMEOUT_SECS` is not a positive integer
    pub fn load() -> AppResult<Self> {
        let log_file_str = non_empty_var(ENV_VAR_SUGARLOG_FILE).unwrap_or_else(|| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_LOG_SUBPATH)
        });
        let log_file = expand_path(&log_file_str)?;

        if log_file.as_os_str().is_empty() {
            return Err(AppError::Config("Reading log path is empty".to_string()));
        }

        let timeout_secs = match non_empty_var(ENV_VAR_SUGARLOG_TIMEOUT_SECS) {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            log_file,
            api_key: non_empty_var(ENV_VAR_GEMINI_API_KEY),
            model: non_empty_var(ENV_VAR_SUGARLOG_MODEL)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: non_empty_var(ENV_VAR_SUGARLOG_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Replaces the log path, expanding `~` and environment variables.
    ///
    /// Used for the `--file` command-line override.
    pub fn with_log_file(mut self, raw: &str) -> AppResult<Self> {
        self.log_file = expand_path(raw)?;
        Ok(self)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Reading log path is empty"
    /// - "Reading log path must be an absolute path"
    /// - "Model name is empty"
    /// - "API base URL is empty"
    /// - "Timeout must be greater than zero"
    ///
    /// # Examples
    ///
    /// ```
    /// use sugarlog::Config;
    /// use std::path::PathBuf;
    ///
    /// let invalid_config = Config {
    ///     log_file: PathBuf::from("relative/log.json"),
    ///     ..Config::default()
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(AppError::Config("Reading log path is empty".to_string()));
        }

        if !self.log_file.is_absolute() {
            return Err(AppError::Config(
                "Reading log path must be an absolute path".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("API base URL is empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(AppError::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the API key or a configuration error naming the missing variable.
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set. An API key is required to ask questions",
                ENV_VAR_GEMINI_API_KEY
            ))
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn parse_timeout_secs(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::Config(format!(
            "{} must be a positive integer, got '{}'",
            ENV_VAR_SUGARLOG_TIMEOUT_SECS, raw
        ))),
        Ok(secs) => Ok(secs),
    }
}
