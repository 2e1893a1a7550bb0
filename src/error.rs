//! Custom error types for ymarchive
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ymarchive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Invalid caller-supplied value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A backup target failed to copy
    #[error("Failed to copy '{target}': {detail}")]
    Copy { target: String, detail: String },
}

impl ArchiveError {
    /// Create a "not found" error for archives
    pub fn archive_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Archive",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a copy failure
    pub fn is_copy_failure(&self) -> bool {
        matches!(self, Self::Copy { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ymarchive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ArchiveError::archive_not_found(42);
        assert_eq!(err.to_string(), "Archive not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = ArchiveError::InvalidArgument("gems must be non-negative, got -5".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: gems must be non-negative, got -5"
        );
    }

    #[test]
    fn test_copy_error() {
        let err = ArchiveError::Copy {
            target: "Players".into(),
            detail: "permission denied".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to copy 'Players': permission denied"
        );
        assert!(err.is_copy_failure());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let archive_err: ArchiveError = io_err.into();
        assert!(matches!(archive_err, ArchiveError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{{").unwrap_err();
        let archive_err: ArchiveError = json_err.into();
        assert!(matches!(archive_err, ArchiveError::Json(_)));
    }
}
