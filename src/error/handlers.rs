//! Error handlers
//!
//! Logs errors and renders them for the operator console.

use crate::error::types::{AppError, AuthError};
use log::{error, warn};

/// Handle a console error
pub fn handle_error(err: &AppError) {
    match err {
        AppError::Auth(_) | AppError::Console(_) => warn!("Request rejected: {}", err),
        _ => error!("HR console error: {}", err),
    }
}

/// Convert error to the short status tag printed before console messages
pub fn error_to_status(err: &AppError) -> &'static str {
    match err {
        AppError::Auth(AuthError::InvalidCredentials) => "DENIED",
        AppError::Auth(AuthError::Unauthorized(_)) => "FORBIDDEN",
        AppError::Auth(AuthError::CannotSelfDelete) => "FORBIDDEN",
        AppError::Auth(AuthError::UserNotFound(_)) => "NOT-FOUND",
        AppError::Auth(AuthError::InvalidProfile(_)) => "INVALID",
        AppError::Console(_) => "INVALID",
        AppError::Storage(_) => "STORAGE",
        AppError::Config(_) => "CONFIG",
        AppError::Io(_) => "IO",
    }
}

/// Message shown to the operator. Authentication failures show the bare
/// reason, everything else keeps its category prefix.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::Auth(e) => e.to_string(),
        AppError::Console(e) => e.to_string(),
        other => other.to_string(),
    }
}
