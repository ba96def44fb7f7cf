//! Error types for XR input conformance tooling.
//!
//! Rule violations found in provider data are *not* errors; they are
//! collected as values by `xrinput-rules`. The types here cover the
//! failures around a conformance pass:
//!
//! - [`provider`]: a provider query could not be answered
//! - [`config`]: the expected-configuration descriptor could not be loaded
//! - [`common`]: the top-level error, its category and severity
//!
//! # Example
//!
//! ```
//! use xrinput_errors::prelude::*;
//!
//! fn settle_ticks(raw: i64) -> Result<u32> {
//!     u32::try_from(raw)
//!         .map_err(|err| ConfigError::invalid("settle_delay_ticks", err.to_string()).into())
//! }
//!
//! assert!(settle_ticks(-1).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod prelude;
pub mod provider;

pub use common::{ErrorCategory, ErrorSeverity, XrInputError};
pub use config::ConfigError;
pub use provider::ProviderError;

/// A specialized `Result` type for conformance tooling.
pub type Result<T> = std::result::Result<T, XrInputError>;

/// A specialized `Result` type for provider queries.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
