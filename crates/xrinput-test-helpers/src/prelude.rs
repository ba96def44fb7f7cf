//! Convenience re-exports for common test utilities.

pub use crate::fixtures::{DeviceFixture, standard_rig};
pub use crate::{assert_has_violation, assert_no_violations, assert_violation_count};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
