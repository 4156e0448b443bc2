//! Core error types for respiro-core.
//!
//! The session controller itself only fails on invalid configuration; the
//! remaining variants cover the configuration layer and IO at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for respiro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session command rejected
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

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

/// Rejected session commands.
///
/// Commands issued in a state where they have no effect are not errors;
/// they are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid configuration: session duration must be positive, got {total_seconds}s")]
    InvalidConfiguration { total_seconds: i64 },
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
