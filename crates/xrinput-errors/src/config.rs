//! Configuration descriptor errors.
//!
//! A *missing* descriptor is not an error: checks then assume the observed
//! devices are the expectation. Only a descriptor that exists and cannot be
//! read or parsed ends up here.

use crate::common::ErrorSeverity;

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The descriptor exists but could not be read
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        /// Descriptor path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The descriptor could not be parsed
    #[error("Failed to parse configuration {path}: {reason}")]
    Parse {
        /// Descriptor path
        path: String,
        /// Parser message
        reason: String,
    },

    /// A field holds an unusable value
    #[error("Invalid configuration field '{field}': {reason}")]
    Invalid {
        /// Field name
        field: String,
        /// Reason for the error
        reason: String,
    },
}

impl ConfigError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create an I/O error for a descriptor path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a descriptor path.
    pub fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid field error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
