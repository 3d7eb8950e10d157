//! Custom error types for the user admin application
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field-level validation failures are not
//! errors; see `services::validation`.

use thiserror::Error;

use crate::models::UserId;

/// The main error type for user admin operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Entity not found in a store collection
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Entity with the same identity already stored
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The user targeted by an update or delete is not in the store
    #[error("User with id '{0}' could not be found in the data context")]
    UserMissing(UserId),

    /// Audit log precondition failures
    #[error("Audit error: {0}")]
    Audit(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Command-line input that could not be accepted
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AdminError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for audit log entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Audit log entry",
            identifier: identifier.into(),
        }
    }

    /// Create an error for a form that failed validation
    pub fn rejected_form(failures: usize) -> Self {
        Self::InvalidInput(format!("{} field(s) failed validation", failures))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UserMissing(_))
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for user admin operations
pub type AdminResult<T> = Result<T, AdminError>;
