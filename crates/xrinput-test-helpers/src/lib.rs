//! Shared test utilities for XR input conformance.
//!
//! # Modules
//!
//! - [`assertions`] - Assertion macros over violation lists
//! - [`fixtures`] - Conformant device fixtures to mutate in tests
//! - [`prelude`] - Convenience re-exports
//!
//! ```rust,ignore
//! use xrinput_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::panic)]

pub mod assertions;
pub mod fixtures;
pub mod prelude;
