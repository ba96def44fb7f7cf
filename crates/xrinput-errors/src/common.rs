//! Top-level error type and classification.

use core::fmt;

use crate::{ConfigError, ProviderError};

/// Top-level error type wrapping every conformance tooling failure.
#[derive(Debug, thiserror::Error)]
pub enum XrInputError {
    /// Provider query errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration descriptor errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors outside configuration loading (snapshots, reports)
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl XrInputError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            XrInputError::Provider(_) => ErrorCategory::Provider,
            XrInputError::Config(_) => ErrorCategory::Config,
            XrInputError::Io(_) => ErrorCategory::IO,
            XrInputError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            XrInputError::Provider(e) => e.severity(),
            XrInputError::Config(e) => e.severity(),
            XrInputError::Io(_) => ErrorSeverity::Error,
            XrInputError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        XrInputError::Other(msg.into())
    }
}

impl From<std::io::Error> for XrInputError {
    fn from(e: std::io::Error) -> Self {
        XrInputError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Provider query errors
    Provider = 0,
    /// Configuration errors
    Config = 1,
    /// I/O errors
    IO = 2,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Provider => write!(f, "Provider"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, the pass can continue with reduced coverage
    Warning = 1,
    /// Error, the operation failed
    Error = 2,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}
