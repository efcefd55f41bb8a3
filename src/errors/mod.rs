//! Error handling utilities for the sugarlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures reading or writing the persisted reading log.
///
/// Every variant carries the path of the log document so the user can find
/// the file that needs attention.
///
/// # Examples
///
/// ```
/// use sugarlog::errors::StorageError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = StorageError::Write {
///     path: PathBuf::from("/data/blood_sugar_log.json"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("Failed to write reading log"));
/// assert!(format!("{}", error).contains("/data/blood_sugar_log.json"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The log document exists but could not be read.
    #[error("Failed to read reading log {path}: {source}. Please check file permissions.")]
    Read {
        /// Path to the log document
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The updated log could not be written back.
    #[error("Failed to write reading log {path}: {source}. Please check file permissions and available disk space.")]
    Write {
        /// Path to the log document
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The log document is not a valid JSON array of readings.
    #[error("Reading log {path} is corrupt: {source}. Restore it from a backup or move it aside to start a new log.")]
    Corrupt {
        /// Path to the log document
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The log document contains a reading older than its predecessor.
    #[error("Reading log {path} is out of order: entry {index} is older than the entry before it")]
    OutOfOrder {
        /// Path to the log document
        path: PathBuf,
        /// Zero-based position of the offending entry
        index: usize,
    },
}

/// Represents a glucose reading that cannot be recorded.
///
/// # Examples
///
/// ```
/// use sugarlog::errors::ValidationError;
///
/// let error = ValidationError::OutOfRange { level: 501, min: 40, max: 500 };
/// assert_eq!(
///     format!("{}", error),
///     "Blood sugar level 501 mg/dL is out of range (expected 40-500)"
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The level lies outside the accepted measurement range.
    #[error("Blood sugar level {level} mg/dL is out of range (expected {min}-{max})")]
    OutOfRange {
        /// The rejected level
        level: i64,
        /// Lowest accepted level
        min: i64,
        /// Highest accepted level
        max: i64,
    },
}

/// Represents failures of the remote text-generation service.
///
/// These errors never reach the user directly: the assistant converts them into
/// a fixed fallback reply and only logs the detail.
///
/// # Examples
///
/// ```
/// use sugarlog::errors::GenerationError;
///
/// let error = GenerationError::MalformedResponse("no candidates".to_string());
/// assert!(format!("{}", error).contains("no candidates"));
/// ```
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request could not be sent or timed out.
    #[error("Generation service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Generation service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response did not contain the expected completion text.
    #[error("Invalid response from generation service: {0}")]
    MalformedResponse(String),

    /// No API key was configured.
    #[error("No API key configured for the generation service")]
    MissingApiKey,
}

/// Represents all possible errors that can occur in the sugarlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use sugarlog::errors::AppError;
///
/// let error = AppError::Config("Reading log path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Reading log path is empty");
/// ```
///
/// Converting from a validation error:
/// ```
/// use sugarlog::errors::{AppError, ValidationError};
///
/// let error: AppError = ValidationError::OutOfRange { level: 39, min: 40, max: 500 }.into();
/// assert!(matches!(error, AppError::Validation(_)));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors outside the reading log (e.g. writing to stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors reading or writing the reading log.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A submitted reading was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors from the text-generation service.
    #[error("AI error: {0}")]
    Generation(#[from] GenerationError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use sugarlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
