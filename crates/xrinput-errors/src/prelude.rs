//! Prelude module for convenient error handling imports.

pub use crate::{
    ProviderResult, Result,
    common::{ErrorCategory, ErrorSeverity, XrInputError},
    config::ConfigError,
    provider::ProviderError,
};
