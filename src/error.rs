//! Custom error types for CediTrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for CediTrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for form input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Source account cannot cover amount plus fee
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Money, required: Money },

    /// Account directory snapshot errors
    #[error("Directory error: {0}")]
    Directory(String),
}

impl TrackerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The amount still missing when a transfer exceeds the source balance
    pub fn shortfall(&self) -> Option<Money> {
        match self {
            Self::InsufficientBalance {
                available,
                required,
            } => Some(*required - *available),
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for CediTrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::account_not_found("acc-1234");
        assert_eq!(err.to_string(), "Account not found: acc-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_balance_error() {
        let err = TrackerError::InsufficientBalance {
            available: Money::from_pesewas(5000),
            required: Money::from_pesewas(5100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: available GHS 50.00, required GHS 51.00"
        );
        assert_eq!(err.shortfall(), Some(Money::from_pesewas(100)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
