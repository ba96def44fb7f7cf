//! Features every device of a given role must expose.

use xrinput_device_types::DeviceRole;

use crate::registry::names;
use crate::{FeatureView, Violation, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRequirement {
    pub role: DeviceRole,
    pub required: &'static [&'static str],
}

/// The table is partial. A role without an entry has no role-specific
/// requirement, which is not the same as an empty requirement.
pub const ROLE_REQUIREMENTS: &[RoleRequirement] = &[
    RoleRequirement {
        role: DeviceRole::Generic,
        required: &[
            names::DEVICE_ROTATION,
            names::LEFT_EYE_ROTATION,
            names::RIGHT_EYE_ROTATION,
            names::CENTER_EYE_ROTATION,
        ],
    },
    RoleRequirement {
        role: DeviceRole::TrackingReference,
        required: &[names::DEVICE_POSITION, names::DEVICE_ROTATION],
    },
    RoleRequirement {
        role: DeviceRole::HardwareTracker,
        required: &[names::DEVICE_POSITION, names::DEVICE_ROTATION],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RoleRequirementTable {
    entries: &'static [RoleRequirement],
}

impl Default for RoleRequirementTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoleRequirementTable {
    pub fn standard() -> Self {
        Self::new(ROLE_REQUIREMENTS)
    }

    pub fn new(entries: &'static [RoleRequirement]) -> Self {
        Self { entries }
    }

    /// `None` when the role has no entry.
    pub fn required_features(&self, role: DeviceRole) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.required)
    }

    /// One violation per missing mandatory feature, in table order.
    pub fn check(&self, view: &FeatureView<'_>) -> Vec<Violation> {
        let role = view.device().role;
        let Some(required) = self.required_features(role) else {
            return Vec::new();
        };
        required
            .iter()
            .filter(|name| !view.has_feature(name))
            .map(|name| {
                Violation::for_device(
                    view.device(),
                    ViolationKind::RoleFeatureMissing {
                        role,
                        feature: (*name).to_string(),
                    },
                )
            })
            .collect()
    }
}
