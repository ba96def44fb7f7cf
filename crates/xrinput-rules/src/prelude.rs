//! Common imports for rule engine users.

pub use crate::{
    Check, FeatureTypeRegistry, FeatureView, HapticLimits, ImplicationRuleSet, MAX_HAPTIC_BUFFER,
    Notice, Registration, RoleRequirementTable, SubsystemListing, TypeCheck, Violation,
    ViolationKind, check_consistency, check_unique, names,
};
pub use xrinput_device_types::{
    Device, DeviceCharacteristics, DeviceId, DeviceRole, FeatureUsage, HapticCapabilities,
    SemanticType, Subsystem, SubsystemId,
};
