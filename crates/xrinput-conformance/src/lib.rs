//! Conformance pass over an XR input provider.
//!
//! A pass captures one snapshot of provider state, runs the selected
//! validators from [`xrinput_rules`] over it and aggregates the result
//! into a [`ConformanceReport`]. Provider failures become violations; a
//! pass never aborts.
//!
//! ```
//! use xrinput_conformance::prelude::*;
//!
//! let provider = SnapshotProvider::new();
//! let report = ConformanceRunner::default().run(&provider);
//!
//! assert!(!report.is_pass());
//! assert_eq!(report.violations[0].kind, ViolationKind::NoDevicesFound);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod expectation;
pub mod frames;
pub mod prelude;
pub mod provider;
pub mod report;
pub mod runner;
pub mod snapshot;
pub mod snapshot_file;

pub use config::ConformanceConfig;
pub use expectation::check_expected;
pub use frames::{FrameSource, IntervalFrameSource, settle};
pub use provider::InputProvider;
pub use report::ConformanceReport;
pub use runner::{ConformanceRunner, RunnerOptions};
pub use snapshot::{CaptureScope, ProviderSnapshot};
pub use snapshot_file::{DeviceRecord, ListingRecord, SnapshotProvider};
