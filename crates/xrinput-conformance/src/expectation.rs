//! Observed devices against the expected-configuration descriptor.

use xrinput_device_types::Device;
use xrinput_rules::{Violation, ViolationKind};

/// Compare observed devices with the descriptor's expected names.
///
/// Counts must agree. Names are matched as a multiset: every expected
/// name consumes at most one observed device of that exact name.
pub fn check_expected(expected: &[String], devices: &[Device]) -> Vec<Violation> {
    let mut violations = Vec::new();

    if expected.len() != devices.len() {
        violations.push(Violation::pass_wide(ViolationKind::DeviceCountMismatch {
            expected: expected.len(),
            observed: devices.len(),
        }));
    }

    let mut matched = vec![false; devices.len()];
    let mut missing = Vec::new();
    for name in expected {
        let slot = devices
            .iter()
            .zip(matched.iter_mut())
            .find(|(device, taken)| !**taken && device.name == *name);
        match slot {
            Some((_, taken)) => *taken = true,
            None => missing.push(name),
        }
    }

    violations.extend(
        devices
            .iter()
            .zip(&matched)
            .filter(|(_, taken)| !**taken)
            .map(|(device, _)| Violation::for_device(device, ViolationKind::UnexpectedDevice)),
    );
    violations.extend(
        missing
            .into_iter()
            .map(|name| Violation::named(name.as_str(), ViolationKind::MissingExpectedDevice)),
    );
    violations
}
