//! Error types for trackline
//!
//! Each error type has a corresponding error code for programmatic handling.
//! The resolver itself never fails; these errors come from loading records,
//! configuration and pipeline definitions.

use thiserror::Error;

/// Result type alias for trackline operations
pub type Result<T> = std::result::Result<T, TracklineError>;

/// Main error type for all trackline operations
#[derive(Debug, Error)]
pub enum TracklineError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Record did not match the expected shape
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Domain name not recognised (shopping, pickup, shipment)
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    /// No pipeline registered under the given name
    #[error("Unknown pipeline: {0}")]
    UnknownPipeline(String),

    /// Pipeline definition rejected at construction
    #[error("Invalid pipeline: {0}")]
    InvalidPipeline(String),

    /// Status source has no entity with the given id
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl TracklineError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            TracklineError::InvalidJson(_) => "INVALID_JSON",
            TracklineError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            TracklineError::FileNotFound(_) => "FILE_NOT_FOUND",
            TracklineError::ConfigError(_) => "CONFIG_ERROR",
            TracklineError::UnknownDomain(_) => "UNKNOWN_DOMAIN",
            TracklineError::UnknownPipeline(_) => "UNKNOWN_PIPELINE",
            TracklineError::InvalidPipeline(_) => "INVALID_PIPELINE",
            TracklineError::EntityNotFound(_) => "ENTITY_NOT_FOUND",
            TracklineError::Io(_) => "IO_ERROR",
            TracklineError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        TracklineError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
///
/// Usage errors (bad domain or pipeline name) exit with 2, like clap does for
/// bad arguments. Everything else is a plain failure.
pub fn to_exit_code(error: &TracklineError) -> i32 {
    match error {
        TracklineError::UnknownDomain(_) | TracklineError::UnknownPipeline(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TracklineError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(TracklineError::SchemaValidation("test".into()).code(), "SCHEMA_VALIDATION");
        assert_eq!(TracklineError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(TracklineError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(TracklineError::UnknownDomain("test".into()).code(), "UNKNOWN_DOMAIN");
        assert_eq!(TracklineError::UnknownPipeline("test".into()).code(), "UNKNOWN_PIPELINE");
        assert_eq!(TracklineError::InvalidPipeline("test".into()).code(), "INVALID_PIPELINE");
        assert_eq!(TracklineError::EntityNotFound("test".into()).code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&TracklineError::UnknownDomain("x".into())), 2);
        assert_eq!(to_exit_code(&TracklineError::UnknownPipeline("x".into())), 2);
        assert_eq!(to_exit_code(&TracklineError::FileNotFound("x".into())), 1);
        assert_eq!(to_exit_code(&TracklineError::InvalidJson("x".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = TracklineError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
