//! Rule engine for XR input device conformance.
//!
//! Everything here is pure and synchronous: the validators take a device
//! snapshot and the fixed rule tables and return a list of [`Violation`]s.
//! A pass with no violations is a pass.
//!
//! - [`registry`]: common feature vocabulary and value types
//! - [`implications`]: implication and biconditional rules between features
//! - [`roles`]: features mandatory for a device role
//! - [`uniqueness`]: no feature name repeats within a device
//! - [`haptics`]: haptic capability numeric invariants
//! - [`enumeration`]: global vs per-subsystem enumeration consistency
//!
//! # Example
//!
//! ```
//! use xrinput_rules::prelude::*;
//!
//! let device = Device::new(1, "Right Controller", DeviceRole::RightHanded);
//! let features = vec![FeatureUsage::float(names::TRIGGER)];
//! let view = FeatureView::new(&device, &features);
//!
//! let violations = ImplicationRuleSet::standard().evaluate(&view);
//! assert_eq!(violations.len(), 1);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod check;
pub mod enumeration;
pub mod haptics;
pub mod implications;
pub mod prelude;
pub mod registry;
pub mod roles;
pub mod uniqueness;
pub mod view;
pub mod violation;

pub use check::{Check, UnknownCheck};
pub use enumeration::{SubsystemListing, check_consistency};
pub use haptics::{HapticLimits, MAX_HAPTIC_BUFFER};
pub use implications::{
    Condition, ImplicationRule, ImplicationRuleSet, Requirement, RuleKind, STANDARD_RULES,
};
pub use registry::{COMMON_USAGES, FeatureTypeRegistry, Registration, TypeCheck, names};
pub use roles::{ROLE_REQUIREMENTS, RoleRequirement, RoleRequirementTable};
pub use uniqueness::{check_unique, duplicated_names};
pub use view::FeatureView;
pub use violation::{ALL_DEVICES, Notice, Violation, ViolationKind};
