//! Consistency between the global device list and per-subsystem listings.
//!
//! The subsystem listings must form an exact, disjoint cover of the global
//! enumeration. Identity is the [`DeviceId`], never the display name.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use xrinput_device_types::{Device, DeviceId, Subsystem};

use crate::{Violation, ViolationKind};

/// The devices one subsystem reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemListing {
    pub subsystem: Subsystem,
    pub devices: Vec<Device>,
}

impl SubsystemListing {
    pub fn new(subsystem: Subsystem, devices: Vec<Device>) -> Self {
        Self { subsystem, devices }
    }
}

/// Verify that `listings` partition `global` exactly.
///
/// Each listed device must be globally known, must point back at the
/// listing's subsystem and is consumed from a working set on first sight.
/// A second sighting is a duplicate claim. Whatever remains in the working
/// set afterwards was never claimed.
pub fn check_consistency(global: &[Device], listings: &[SubsystemListing]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut working: BTreeMap<DeviceId, &Device> = BTreeMap::new();

    for device in global {
        if working.insert(device.id, device).is_some() {
            violations.push(Violation::for_device(
                device,
                ViolationKind::DuplicateGlobalDevice,
            ));
        }
    }
    let known: BTreeSet<DeviceId> = working.keys().copied().collect();

    for listing in listings {
        let subsystem = &listing.subsystem;
        for device in &listing.devices {
            if !known.contains(&device.id) {
                violations.push(Violation::for_device(
                    device,
                    ViolationKind::NotGloballyReported {
                        subsystem: subsystem.descriptor_id.clone(),
                    },
                ));
                continue;
            }
            if device.subsystem != Some(subsystem.id) {
                violations.push(Violation::for_device(
                    device,
                    ViolationKind::WrongSubsystem {
                        expected: subsystem.descriptor_id.clone(),
                        reported: device.subsystem,
                    },
                ));
            }
            if working.remove(&device.id).is_none() {
                violations.push(Violation::for_device(
                    device,
                    ViolationKind::DuplicateClaim {
                        subsystem: subsystem.descriptor_id.clone(),
                    },
                ));
            }
        }
    }

    violations.extend(
        working
            .into_values()
            .map(|device| Violation::for_device(device, ViolationKind::UnclaimedDevice)),
    );
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrinput_device_types::{DeviceRole, SubsystemId};

    fn device(id: u64, name: &str, subsystem: u32) -> Device {
        Device::new(id, name, DeviceRole::Unknown).in_subsystem(SubsystemId(subsystem))
    }

    #[test]
    fn test_same_name_distinct_identity() {
        let a = device(1, "Tracker", 1);
        let b = device(2, "Tracker", 1);
        let listing = SubsystemListing::new(
            Subsystem::new(1, "Mock-Input"),
            vec![a.clone(), b.clone()],
        );
        assert!(check_consistency(&[a, b], &[listing]).is_empty());
    }

    #[test]
    fn test_same_listing_twice_is_duplicate_claim() {
        let a = device(1, "A", 1);
        let listing = SubsystemListing::new(
            Subsystem::new(1, "Mock-Input"),
            vec![a.clone(), a.clone()],
        );
        let violations = check_consistency(&[a], &[listing]);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationKind::DuplicateClaim { .. }
        ));
    }

    #[test]
    fn test_unknown_device_is_not_a_duplicate_claim() {
        let a = device(1, "A", 1);
        let stranger = device(9, "Ghost", 1);
        let listing =
            SubsystemListing::new(Subsystem::new(1, "Mock-Input"), vec![a.clone(), stranger]);
        let violations = check_consistency(&[a], &[listing]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].device_name, "Ghost");
        assert!(matches!(
            violations[0].kind,
            ViolationKind::NotGloballyReported { .. }
        ));
    }

    #[test]
    fn test_wrong_back_reference_still_consumed() {
        let a = device(1, "A", 2);
        let listing = SubsystemListing::new(Subsystem::new(1, "Mock-Input"), vec![a.clone()]);
        let violations = check_consistency(&[a], &[listing]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::WrongSubsystem {
                expected: "Mock-Input".to_string(),
                reported: Some(SubsystemId(2)),
            }
        );
    }

    #[test]
    fn test_duplicate_global_identity() {
        let a = device(1, "A", 1);
        let listing = SubsystemListing::new(Subsystem::new(1, "Mock-Input"), vec![a.clone()]);
        let violations = check_consistency(&[a.clone(), a], &[listing]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DuplicateGlobalDevice);
    }
}
