//! Error types for xrinputctl

use thiserror::Error;
use xrinput_errors::{ErrorCategory, ErrorSeverity, XrInputError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot load provider snapshot")]
    Snapshot(#[source] XrInputError),

    #[error("Cannot load configuration descriptor")]
    Config(#[source] XrInputError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn snapshot(err: impl Into<XrInputError>) -> Self {
        CliError::Snapshot(err.into())
    }

    pub fn config(err: impl Into<XrInputError>) -> Self {
        CliError::Config(err.into())
    }

    /// Classification of the underlying tooling error, if any.
    pub fn classify(&self) -> Option<(ErrorCategory, ErrorSeverity)> {
        match self {
            CliError::Snapshot(err) | CliError::Config(err) => {
                Some((err.category(), err.severity()))
            }
            CliError::Json(_) => None,
        }
    }
}

/// Process exit codes.
pub mod exit {
    pub const VIOLATIONS: i32 = 1;
    pub const INPUT_ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrinput_errors::ConfigError;

    #[test]
    fn test_config_errors_classify_as_config() {
        let err = CliError::config(ConfigError::parse("conformance.json", "expected value"));
        assert_eq!(
            err.classify(),
            Some((ErrorCategory::Config, ErrorSeverity::Error))
        );
        assert_eq!(err.to_string(), "Cannot load configuration descriptor");
    }
}
