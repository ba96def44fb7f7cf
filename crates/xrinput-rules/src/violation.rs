//! Violations and informational notices produced by the validators.
//!
//! A violation is a value, not an error: every validator returns a list of
//! them and the pass continues. The `Display` text of a [`ViolationKind`]
//! is the rule description handed to reporting.

use core::fmt;

use serde::Serialize;
use xrinput_device_types::{Device, DeviceId, DeviceRole, SemanticType, SubsystemId};

use crate::Check;

/// What rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The provider reported no devices at all.
    #[error(
        "No devices found. Complete a full device setup for this provider before rerunning the conformance pass"
    )]
    NoDevicesFound,

    /// A provider query failed.
    #[error("Provider query '{query}' failed: {reason}")]
    ProviderQueryFailed { query: String, reason: String },

    /// Observed device count differs from the expected configuration.
    #[error("Expected {expected} devices but observed {observed}")]
    DeviceCountMismatch { expected: usize, observed: usize },

    /// An observed device is not named by the expected configuration.
    #[error("Device is not named in the expected configuration")]
    UnexpectedDevice,

    /// An expected device name was not observed.
    #[error("Expected device was not reported by the provider")]
    MissingExpectedDevice,

    /// The same feature name appears more than once on a device.
    #[error("The feature usage {feature} is duplicated in this device ({occurrences} occurrences)")]
    DuplicateFeature { feature: String, occurrences: usize },

    /// A registered feature reports a different value type.
    #[error("{feature} should be of type {expected}, but is observed as type {observed}")]
    TypeMismatch {
        feature: String,
        expected: SemanticType,
        observed: SemanticType,
    },

    /// An any-implies-all rule was triggered but not satisfied.
    #[error("{description} (missing: {})", .missing.join(", "))]
    ImplicationBroken {
        rule: String,
        description: String,
        missing: Vec<String>,
        check: Check,
    },

    /// Exactly one half of a biconditional pair is present.
    #[error("If either a {present} or {absent} usage exists, then both must exist ({absent} is missing)")]
    BiconditionalBroken { present: String, absent: String },

    /// A role-mandatory feature is missing.
    #[error("A {role} device must have a {feature} usage")]
    RoleFeatureMissing { role: DeviceRole, feature: String },

    /// Buffered haptics reported with a zero frequency.
    #[error("Supports buffer is true, but bufferFrequencyHz is zero")]
    HapticFrequencyZero,

    /// Buffered haptics reported with a zero optimal size.
    #[error("Supports buffer is true, but bufferOptimalSize is zero")]
    HapticOptimalSizeZero,

    /// Optimal buffer size larger than the maximum buffer size.
    #[error("bufferOptimalSize ({optimal}) is greater than bufferMaxSize ({max})")]
    HapticOptimalExceedsMax { optimal: u32, max: u32 },

    /// A buffer size exceeds the platform haptic buffer ceiling.
    #[error("{field} = {value} is greater than the haptic buffer ceiling of {ceiling}")]
    HapticBufferExceedsCeiling {
        field: String,
        value: u32,
        ceiling: u32,
    },

    /// A buffer field is non-zero although buffers are unsupported.
    #[error("Supports buffer is false, but {field} is {value} instead of 0")]
    HapticFieldWithoutBuffer { field: String, value: u32 },

    /// A subsystem lists a device the global enumeration never reported.
    #[error("Subsystem \"{subsystem}\" reports a device that is not reported by the global device list")]
    NotGloballyReported { subsystem: String },

    /// A device's subsystem back-reference names another subsystem.
    #[error(
        "Device must report as from the subsystem it was pulled from, which was \"{expected}\" (reported {})",
        .reported.map_or_else(|| "none".to_string(), |id| id.to_string())
    )]
    WrongSubsystem {
        expected: String,
        reported: Option<SubsystemId>,
    },

    /// A device was claimed a second time, by the same or another subsystem.
    #[error("Subsystem \"{subsystem}\" claims a device that was already claimed")]
    DuplicateClaim { subsystem: String },

    /// A globally reported device was not claimed by any subsystem.
    #[error("Device is reported by the global device list but by no subsystem")]
    UnclaimedDevice,

    /// The global enumeration lists the same device identity twice.
    #[error("Device identity appears more than once in the global device list")]
    DuplicateGlobalDevice,
}

impl ViolationKind {
    /// The check family this violation belongs to, if any.
    ///
    /// Provider anomalies are not tied to a single check.
    pub fn check(&self) -> Option<Check> {
        match self {
            ViolationKind::NoDevicesFound | ViolationKind::ProviderQueryFailed { .. } => None,
            ViolationKind::DeviceCountMismatch { .. }
            | ViolationKind::UnexpectedDevice
            | ViolationKind::MissingExpectedDevice => Some(Check::Configuration),
            ViolationKind::DuplicateFeature { .. } => Some(Check::UniqueUsages),
            ViolationKind::TypeMismatch { .. } => Some(Check::BackingTypes),
            ViolationKind::ImplicationBroken { check, .. } => Some(*check),
            ViolationKind::BiconditionalBroken { .. } => Some(Check::RelatedUsages),
            ViolationKind::RoleFeatureMissing { .. } => Some(Check::RoleRequirements),
            ViolationKind::HapticFrequencyZero
            | ViolationKind::HapticOptimalSizeZero
            | ViolationKind::HapticOptimalExceedsMax { .. }
            | ViolationKind::HapticBufferExceedsCeiling { .. }
            | ViolationKind::HapticFieldWithoutBuffer { .. } => Some(Check::HapticCapabilities),
            ViolationKind::NotGloballyReported { .. }
            | ViolationKind::WrongSubsystem { .. }
            | ViolationKind::DuplicateClaim { .. }
            | ViolationKind::UnclaimedDevice
            | ViolationKind::DuplicateGlobalDevice => Some(Check::SubsystemEnumeration),
        }
    }
}

/// Device name used for violations that concern the whole pass.
pub const ALL_DEVICES: &str = "all devices";

/// A broken rule, attributed to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub device_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    /// A violation attributed to a concrete device.
    pub fn for_device(device: &Device, kind: ViolationKind) -> Self {
        Self {
            device_name: device.name.clone(),
            device_id: Some(device.id),
            kind,
        }
    }

    /// A violation attributed to a name only (expected devices, whole-pass anomalies).
    pub fn named(device_name: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            device_name: device_name.into(),
            device_id: None,
            kind,
        }
    }

    /// A violation about the pass as a whole rather than one device.
    pub fn pass_wide(kind: ViolationKind) -> Self {
        Self::named(ALL_DEVICES, kind)
    }

    /// Human-readable description of the broken rule.
    pub fn rule_description(&self) -> String {
        self.kind.to_string()
    }

    pub fn check(&self) -> Option<Check> {
        self.kind.check()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.device_id {
            Some(id) => write!(f, "[{} {}] {}", self.device_name, id, self.kind),
            None => write!(f, "[{}] {}", self.device_name, self.kind),
        }
    }
}

/// Informational line for a provider-specific feature the registry does
/// not know. Never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub device_name: String,
    pub feature: String,
    pub value_type: SemanticType,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Provider specific feature detected: \"{}\" ({}). Its backing value type cannot be verified",
            self.device_name, self.feature, self.value_type
        )
    }
}
