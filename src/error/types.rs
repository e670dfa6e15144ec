//! Error types
//!
//! Defines domain-specific error types for each module of the console.

use std::io;
use thiserror::Error;

/// Authentication and authorization errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown employee id and wrong password share this variant so callers
    /// cannot tell which one failed.
    #[error("Invalid Employee ID or password")]
    InvalidCredentials,
    #[error("Only Master Admin can {0}")]
    Unauthorized(String),
    #[error("Cannot delete your own account")]
    CannotSelfDelete,
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

impl AuthError {
    pub fn unauthorized(action: &str) -> Self {
        AuthError::Unauthorized(action.to_string())
    }
}

/// Durable storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed record under key {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Text that names no known role, employment type or status
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown employment type: {0}")]
    UnknownEmploymentType(String),
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

/// Console input errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// General console error that encompasses all error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Returns the authentication error inside, if that is what this is.
    pub fn as_auth(&self) -> Option<&AuthError> {
        match self {
            AppError::Auth(e) => Some(e),
            _ => None,
        }
    }
}
