//! Individually selectable conformance checks.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// One validation family of a conformance pass.
///
/// A full pass runs [`Check::ALL`]; callers may run any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// Observed devices match the expected-configuration descriptor.
    Configuration,
    /// Related-usage implications and the Trigger/Grip biconditionals.
    RelatedUsages,
    /// Minimum feature set of a tracked device.
    TrackedDevice,
    /// Role-mandatory features.
    RoleRequirements,
    /// Haptic capability numeric invariants.
    HapticCapabilities,
    /// Feature names are unique within a device.
    UniqueUsages,
    /// Registered features report their registered value type.
    BackingTypes,
    /// Global and per-subsystem enumerations agree.
    SubsystemEnumeration,
}

impl Check {
    pub const ALL: [Check; 8] = [
        Check::Configuration,
        Check::RelatedUsages,
        Check::TrackedDevice,
        Check::RoleRequirements,
        Check::HapticCapabilities,
        Check::UniqueUsages,
        Check::BackingTypes,
        Check::SubsystemEnumeration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Configuration => "configuration",
            Check::RelatedUsages => "related-usages",
            Check::TrackedDevice => "tracked-device",
            Check::RoleRequirements => "role-requirements",
            Check::HapticCapabilities => "haptic-capabilities",
            Check::UniqueUsages => "unique-usages",
            Check::BackingTypes => "backing-types",
            Check::SubsystemEnumeration => "subsystem-enumeration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Check::Configuration => "Observed devices match the expected configuration descriptor",
            Check::RelatedUsages => "Related feature usages are present together",
            Check::TrackedDevice => "Tracked devices expose the minimum tracking usages",
            Check::RoleRequirements => "Devices expose the usages their role requires",
            Check::HapticCapabilities => "Haptic buffer capabilities are internally consistent",
            Check::UniqueUsages => "No feature usage name repeats within a device",
            Check::BackingTypes => "Common feature usages report their registered value type",
            Check::SubsystemEnumeration => {
                "Subsystem device lists exactly partition the global device list"
            }
        }
    }

    /// Whether an empty device list makes this check meaningless.
    ///
    /// The configuration check compares against the descriptor, which may
    /// legitimately expect no devices.
    pub fn needs_devices(&self) -> bool {
        !matches!(self, Check::Configuration)
    }

    /// Whether this check inspects each device's feature usages.
    pub fn needs_features(&self) -> bool {
        matches!(
            self,
            Check::RelatedUsages
                | Check::TrackedDevice
                | Check::RoleRequirements
                | Check::UniqueUsages
                | Check::BackingTypes
        )
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a check name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check '{0}'")]
pub struct UnknownCheck(pub String);

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Check::ALL
            .into_iter()
            .find(|check| check.as_str() == s)
            .ok_or_else(|| UnknownCheck(s.to_string()))
    }
}
