//! Custom error types for duit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for duit operations
#[derive(Error, Debug)]
pub enum DuitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Exchange-rate errors (fetch failures, missing rates)
    #[error("Rates error: {0}")]
    Rates(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DuitError {
    /// Create a "not found" error for a ledger entry index
    pub fn entry_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: index.to_string(),
        }
    }

    /// Create a "not found" error for a monthly item index
    pub fn monthly_item_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Monthly item",
            identifier: index.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DuitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DuitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for DuitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Rates(err.to_string())
    }
}

/// Result type alias for duit operations
pub type DuitResult<T> = Result<T, DuitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DuitError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = DuitError::entry_not_found(3);
        assert_eq!(err.to_string(), "Entry not found: 3");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let duit_err: DuitError = io_err.into();
        assert!(matches!(duit_err, DuitError::Io(_)));
    }
}
