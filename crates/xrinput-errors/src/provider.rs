//! Provider query errors.
//!
//! A provider failure never aborts a conformance pass; the runner turns it
//! into a reportable violation. These types carry what went wrong.

use crate::common::ErrorSeverity;

/// Errors returned by a device/feature provider query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// A query could not be answered
    #[error("Provider query '{query}' failed: {reason}")]
    QueryFailed {
        /// Query name (e.g. `listDevices`)
        query: String,
        /// Failure reason
        reason: String,
    },

    /// The queried device is not known to the provider
    #[error("Device {0} is not known to the provider")]
    UnknownDevice(String),

    /// The queried subsystem is not known to the provider
    #[error("Subsystem {0} is not known to the provider")]
    UnknownSubsystem(String),
}

impl ProviderError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProviderError::QueryFailed { .. } => ErrorSeverity::Error,
            // A stale id only loses coverage for that device or subsystem.
            ProviderError::UnknownDevice(_) | ProviderError::UnknownSubsystem(_) => {
                ErrorSeverity::Warning
            }
        }
    }

    /// Create a query failure error.
    pub fn query_failed(query: impl Into<String>, reason: impl Into<String>) -> Self {
        ProviderError::QueryFailed {
            query: query.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown device error.
    pub fn unknown_device(device: impl Into<String>) -> Self {
        ProviderError::UnknownDevice(device.into())
    }

    /// Create an unknown subsystem error.
    pub fn unknown_subsystem(subsystem: impl Into<String>) -> Self {
        ProviderError::UnknownSubsystem(subsystem.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::query_failed("listDevices", "runtime shut down");
        assert_eq!(
            err.to_string(),
            "Provider query 'listDevices' failed: runtime shut down"
        );
    }

    #[test]
    fn test_provider_error_severity() {
        assert_eq!(
            ProviderError::query_failed("listSubsystems", "gone").severity(),
            ErrorSeverity::Error
        );
        assert_eq!(
            ProviderError::unknown_device("#4").severity(),
            ErrorSeverity::Warning
        );
    }

    #[test]
    fn test_provider_error_constructors() {
        assert!(matches!(
            ProviderError::unknown_subsystem("subsystem#2"),
            ProviderError::UnknownSubsystem(_)
        ));
        assert!(matches!(
            ProviderError::query_failed("q", "r"),
            ProviderError::QueryFailed { .. }
        ));
    }
}
