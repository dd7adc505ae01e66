//! Core error types for daybook-core.
//!
//! Trackers never report an error for an empty required field; such adds are
//! silently ignored. Errors only surface at the boundaries: unknown ids,
//! unparseable input and configuration I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daybook-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A record with the given id does not exist in its collection
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        CoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// No configuration directory could be determined
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

/// Validation errors raised when decoding user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date is not in `YYYY-MM-DD` form
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Time is not in `HH:MM` form
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// String does not name any variant of an enumeration
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Numeric value outside its permitted range
    #[error("Value {value} for '{field}' is out of range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Operation not allowed in the record's current state
    #[error("Invalid state for '{field}': {message}")]
    InvalidState { field: &'static str, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
