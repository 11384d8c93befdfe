//! Centralized error types for the notification center.

use thiserror::Error;

/// Main error type for notification center operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Invalid state transition for '{id}': cannot move from '{from}' to '{to}'")]
    InvalidStateTransition { id: String, from: String, to: String },

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for notification center operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

impl NotifyError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid value error for a named field.
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
