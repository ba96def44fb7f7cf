//! Implication rules between features that co-occur on one device.
//!
//! Every rule is an independent predicate over a [`FeatureView`]; the
//! order rules are evaluated in does not change the outcome.

use core::fmt;

use xrinput_device_types::DeviceCharacteristics;

use crate::registry::names;
use crate::{Check, FeatureView, Violation, ViolationKind};

/// Something that is or is not true of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// A feature with this exact name is present.
    Feature(&'static str),
    /// All of these characteristic bits are set.
    Characteristic(DeviceCharacteristics),
}

impl Condition {
    pub fn holds(&self, view: &FeatureView<'_>) -> bool {
        match self {
            Condition::Feature(name) => view.has_feature(name),
            Condition::Characteristic(flags) => view.has_characteristic(*flags),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Feature(name) => f.write_str(name),
            Condition::Characteristic(flags) => write!(f, "{flags} characteristic"),
        }
    }
}

/// One conjunct of an implication's required side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Present(Condition),
    /// At least one of these must hold.
    AnyOf(&'static [Condition]),
}

impl Requirement {
    pub fn met(&self, view: &FeatureView<'_>) -> bool {
        match self {
            Requirement::Present(condition) => condition.holds(view),
            Requirement::AnyOf(conditions) => conditions.iter().any(|c| c.holds(view)),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Present(condition) => condition.fmt(f),
            Requirement::AnyOf(conditions) => {
                f.write_str("one of [")?;
                for (i, condition) in conditions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    condition.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// If any trigger holds, every requirement must be met.
    AnyImpliesAll {
        triggers: &'static [Condition],
        required: &'static [Requirement],
    },
    /// Both features present or both absent.
    BiconditionalPair {
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicationRule {
    pub id: &'static str,
    pub description: &'static str,
    pub check: Check,
    pub kind: RuleKind,
}

impl ImplicationRule {
    /// Evaluate this rule against one device. `None` means the rule holds.
    pub fn evaluate(&self, view: &FeatureView<'_>) -> Option<Violation> {
        let kind = match self.kind {
            RuleKind::AnyImpliesAll { triggers, required } => {
                if !triggers.iter().any(|trigger| trigger.holds(view)) {
                    return None;
                }
                let missing: Vec<String> = required
                    .iter()
                    .filter(|requirement| !requirement.met(view))
                    .map(ToString::to_string)
                    .collect();
                if missing.is_empty() {
                    return None;
                }
                ViolationKind::ImplicationBroken {
                    rule: self.id.to_string(),
                    description: self.description.to_string(),
                    missing,
                    check: self.check,
                }
            }
            RuleKind::BiconditionalPair { first, second } => {
                match (view.has_feature(first), view.has_feature(second)) {
                    (true, false) => ViolationKind::BiconditionalBroken {
                        present: first.to_string(),
                        absent: second.to_string(),
                    },
                    (false, true) => ViolationKind::BiconditionalBroken {
                        present: second.to_string(),
                        absent: first.to_string(),
                    },
                    _ => return None,
                }
            }
        };
        Some(Violation::for_device(view.device(), kind))
    }
}

const DEVICE_MOTION: &[Condition] = &[
    Condition::Feature(names::DEVICE_POSITION),
    Condition::Feature(names::DEVICE_ROTATION),
    Condition::Feature(names::DEVICE_VELOCITY),
    Condition::Feature(names::DEVICE_ANGULAR_VELOCITY),
    Condition::Feature(names::DEVICE_ACCELERATION),
    Condition::Feature(names::DEVICE_ANGULAR_ACCELERATION),
];

/// The fixed rule table.
///
/// The tracked-device rule is deliberately asymmetric: it triggers on any
/// of nine conditions but requires the characteristic bit, `IsTracked`,
/// `TrackingState` and only *one* of the six `Device*` motion features.
pub const STANDARD_RULES: &[ImplicationRule] = &[
    ImplicationRule {
        id: "primary-touch-or-secondary-button-implies-primary-button",
        description: "If a PrimaryTouch usage or a SecondaryButton usage exist, then a PrimaryButton usage must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::AnyImpliesAll {
            triggers: &[
                Condition::Feature(names::PRIMARY_TOUCH),
                Condition::Feature(names::SECONDARY_BUTTON),
            ],
            required: &[Requirement::Present(Condition::Feature(names::PRIMARY_BUTTON))],
        },
    },
    ImplicationRule {
        id: "secondary-touch-implies-primary-touch",
        description: "If a SecondaryTouch usage exists, then a PrimaryTouch usage must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::AnyImpliesAll {
            triggers: &[Condition::Feature(names::SECONDARY_TOUCH)],
            required: &[Requirement::Present(Condition::Feature(names::PRIMARY_TOUCH))],
        },
    },
    ImplicationRule {
        id: "secondary-touch-implies-secondary-button",
        description: "If a SecondaryTouch usage exists, then a SecondaryButton usage must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::AnyImpliesAll {
            triggers: &[Condition::Feature(names::SECONDARY_TOUCH)],
            required: &[Requirement::Present(Condition::Feature(names::SECONDARY_BUTTON))],
        },
    },
    ImplicationRule {
        id: "primary-2d-axis-family-implies-primary-2d-axis",
        description: "If a Primary2DAxisTouch, Primary2DAxisClick, or Secondary2DAxis usage exist, then a Primary2DAxis usage must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::AnyImpliesAll {
            triggers: &[
                Condition::Feature(names::PRIMARY_2D_AXIS_TOUCH),
                Condition::Feature(names::PRIMARY_2D_AXIS_CLICK),
                Condition::Feature(names::SECONDARY_2D_AXIS),
            ],
            required: &[Requirement::Present(Condition::Feature(names::PRIMARY_2D_AXIS))],
        },
    },
    ImplicationRule {
        id: "trigger-iff-trigger-button",
        description: "If either a Trigger or TriggerButton usage exists, then both must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::BiconditionalPair {
            first: names::TRIGGER,
            second: names::TRIGGER_BUTTON,
        },
    },
    ImplicationRule {
        id: "grip-iff-grip-button",
        description: "If either a Grip or GripButton usage exists, then both must exist",
        check: Check::RelatedUsages,
        kind: RuleKind::BiconditionalPair {
            first: names::GRIP,
            second: names::GRIP_BUTTON,
        },
    },
    ImplicationRule {
        id: "tracked-device-minimum",
        description: "At a minimum, a tracked device must have the TrackedDevice characteristic, the IsTracked and TrackingState usages, and one of the Device* motion usages",
        check: Check::TrackedDevice,
        kind: RuleKind::AnyImpliesAll {
            triggers: &[
                Condition::Characteristic(DeviceCharacteristics::TRACKED_DEVICE),
                Condition::Feature(names::IS_TRACKED),
                Condition::Feature(names::TRACKING_STATE),
                Condition::Feature(names::DEVICE_POSITION),
                Condition::Feature(names::DEVICE_ROTATION),
                Condition::Feature(names::DEVICE_VELOCITY),
                Condition::Feature(names::DEVICE_ANGULAR_VELOCITY),
                Condition::Feature(names::DEVICE_ACCELERATION),
                Condition::Feature(names::DEVICE_ANGULAR_ACCELERATION),
            ],
            required: &[
                Requirement::Present(Condition::Characteristic(
                    DeviceCharacteristics::TRACKED_DEVICE,
                )),
                Requirement::Present(Condition::Feature(names::IS_TRACKED)),
                Requirement::Present(Condition::Feature(names::TRACKING_STATE)),
                Requirement::AnyOf(DEVICE_MOTION),
            ],
        },
    },
];

/// A set of implication rules evaluated together.
#[derive(Debug, Clone, Copy)]
pub struct ImplicationRuleSet {
    rules: &'static [ImplicationRule],
}

impl Default for ImplicationRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ImplicationRuleSet {
    pub fn standard() -> Self {
        Self::new(STANDARD_RULES)
    }

    pub fn new(rules: &'static [ImplicationRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [ImplicationRule] {
        self.rules
    }

    pub fn rules_for(&self, check: Check) -> impl Iterator<Item = &'static ImplicationRule> {
        self.rules.iter().filter(move |rule| rule.check == check)
    }

    /// Evaluate every rule; one violation per violated rule.
    pub fn evaluate(&self, view: &FeatureView<'_>) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(view))
            .collect()
    }

    /// Evaluate only the rules belonging to `check`.
    pub fn evaluate_check(&self, view: &FeatureView<'_>, check: Check) -> Vec<Violation> {
        self.rules_for(check)
            .filter_map(|rule| rule.evaluate(view))
            .collect()
    }
}
