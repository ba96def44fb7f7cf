//! Aggregate outcome of one conformance pass.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;
use xrinput_device_types::DeviceRole;
use xrinput_rules::{Check, Notice, Violation};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    pub violations: Vec<Violation>,
    /// Provider-specific features whose type cannot be verified.
    pub notices: Vec<Notice>,
    pub devices_checked: usize,
    pub role_counts: BTreeMap<DeviceRole, usize>,
}

impl ConformanceReport {
    /// A pass has no violations. Notices never fail a pass.
    pub fn is_pass(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations_for<'a>(&'a self, device_name: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.device_name == device_name)
    }

    pub fn violations_in(&self, check: Check) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.check() == Some(check))
    }

    pub fn role_count(&self, role: DeviceRole) -> usize {
        self.role_counts.get(&role).copied().unwrap_or(0)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "FAIL {violation}")?;
        }
        for notice in &self.notices {
            writeln!(f, "INFO {notice}")?;
        }
        for (role, count) in &self.role_counts {
            writeln!(f, "{count} {role} device(s) found")?;
        }
        write!(
            f,
            "{} device(s) checked, {} violation(s): {}",
            self.devices_checked,
            self.violations.len(),
            if self.is_pass() { "PASS" } else { "FAIL" }
        )
    }
}
