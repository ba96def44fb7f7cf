//! Behavioural tests for each validator against conformant fixtures.

use xrinput_rules::prelude::*;
use xrinput_test_helpers::prelude::*;

fn implication_violations(fixture: &DeviceFixture) -> Vec<Violation> {
    let view = FeatureView::new(&fixture.device, &fixture.features);
    ImplicationRuleSet::standard().evaluate(&view)
}

mod conformant_rig {
    use super::*;

    #[test]
    fn test_standard_rig_passes_every_validator() {
        let registry = FeatureTypeRegistry::standard();
        let roles = RoleRequirementTable::standard();
        let limits = HapticLimits::default();

        for fixture in standard_rig() {
            let view = FeatureView::new(&fixture.device, &fixture.features);
            let typed = registry.check(&fixture.device, &fixture.features);
            assert_no_violations!(typed.violations);
            assert!(typed.notices.is_empty());
            assert_no_violations!(ImplicationRuleSet::standard().evaluate(&view));
            assert_no_violations!(roles.check(&view));
            assert_no_violations!(check_unique(&view));
            assert_no_violations!(limits.check(&fixture.device, fixture.haptics.as_ref()));
        }
    }
}

mod related_usages {
    use super::*;

    #[test]
    fn test_primary_touch_without_primary_button() {
        let fixture = DeviceFixture::right_controller(3).without_feature(names::PRIMARY_BUTTON);
        let violations = implication_violations(&fixture);
        assert_violation_count!(
            violations,
            ViolationKind::ImplicationBroken { rule, .. }
                if rule == "primary-touch-or-secondary-button-implies-primary-button",
            1
        );
    }

    #[test]
    fn test_primary_touch_with_primary_button() {
        let device = Device::new(3, "Pad", DeviceRole::GameController);
        let features = vec![
            FeatureUsage::bool(names::PRIMARY_TOUCH),
            FeatureUsage::bool(names::PRIMARY_BUTTON),
        ];
        let view = FeatureView::new(&device, &features);
        assert_no_violations!(ImplicationRuleSet::standard().evaluate(&view));
    }

    #[test]
    fn test_secondary_2d_axis_requires_primary_2d_axis() {
        let device = Device::new(3, "Pad", DeviceRole::GameController);
        let features = vec![FeatureUsage::vector2(names::SECONDARY_2D_AXIS)];
        let view = FeatureView::new(&device, &features);
        let violations = ImplicationRuleSet::standard().evaluate(&view);
        assert_eq!(violations.len(), 1);
        assert_has_violation!(
            violations,
            ViolationKind::ImplicationBroken { missing, .. } if missing == &vec!["Primary2DAxis".to_string()]
        );
    }

    #[test]
    fn test_trigger_biconditional() {
        let only_trigger = DeviceFixture::left_controller(2).without_feature(names::TRIGGER_BUTTON);
        assert_violation_count!(
            implication_violations(&only_trigger),
            ViolationKind::BiconditionalBroken { absent, .. } if absent == "TriggerButton",
            1
        );

        let neither = only_trigger.without_feature(names::TRIGGER);
        assert_no_violations!(implication_violations(&neither));

        assert_no_violations!(implication_violations(&DeviceFixture::left_controller(2)));
    }

    #[test]
    fn test_grip_button_without_grip() {
        let fixture = DeviceFixture::left_controller(2).without_feature(names::GRIP);
        assert_violation_count!(
            implication_violations(&fixture),
            ViolationKind::BiconditionalBroken { present, absent }
                if present == "GripButton" && absent == "Grip",
            1
        );
    }
}

mod tracked_device {
    use super::*;

    #[test]
    fn test_any_motion_feature_satisfies_disjunction() {
        let device = Device::new(8, "Puck", DeviceRole::Unknown)
            .with_characteristics(DeviceCharacteristics::TRACKED_DEVICE);
        let features = vec![
            FeatureUsage::bool(names::IS_TRACKED),
            FeatureUsage::uint(names::TRACKING_STATE),
            FeatureUsage::vector3(names::DEVICE_ANGULAR_ACCELERATION),
        ];
        let view = FeatureView::new(&device, &features);
        assert_no_violations!(ImplicationRuleSet::standard().evaluate(&view));
    }

    #[test]
    fn test_motion_feature_without_tracked_bit() {
        let fixture = DeviceFixture::hardware_tracker(4)
            .with_characteristics(DeviceCharacteristics::empty());
        let violations = implication_violations(&fixture);
        assert_violation_count!(
            violations,
            ViolationKind::ImplicationBroken { check: Check::TrackedDevice, missing, .. }
                if missing == &vec!["TRACKED_DEVICE characteristic".to_string()],
            1
        );
    }

    #[test]
    fn test_untracked_device_without_tracking_features() {
        let device = Device::new(8, "Keyboard", DeviceRole::Unknown);
        let features = vec![FeatureUsage::bool(names::MENU_BUTTON)];
        let view = FeatureView::new(&device, &features);
        assert_no_violations!(ImplicationRuleSet::standard().evaluate(&view));
    }
}

mod role_requirements {
    use super::*;

    #[test]
    fn test_tracking_reference_missing_rotation() {
        let fixture = DeviceFixture::tracking_reference(5).without_feature(names::DEVICE_ROTATION);
        let view = FeatureView::new(&fixture.device, &fixture.features);
        let violations = RoleRequirementTable::standard().check(&view);

        assert_eq!(violations.len(), 1);
        assert_has_violation!(
            violations,
            ViolationKind::RoleFeatureMissing { role: DeviceRole::TrackingReference, feature }
                if feature == "DeviceRotation"
        );
    }
}

mod uniqueness {
    use super::*;

    #[test]
    fn test_injected_duplicate() {
        let fixture =
            DeviceFixture::right_controller(3).with_feature(names::TRIGGER, SemanticType::Float);
        let view = FeatureView::new(&fixture.device, &fixture.features);
        let violations = check_unique(&view);

        assert_eq!(violations.len(), 1);
        assert_has_violation!(
            violations,
            ViolationKind::DuplicateFeature { feature, occurrences: 2 } if feature == "Trigger"
        );
    }

    #[test]
    fn test_duplicate_with_other_type_is_type_checked_per_occurrence() {
        let fixture =
            DeviceFixture::right_controller(3).with_feature(names::TRIGGER, SemanticType::Bool);
        let typed = FeatureTypeRegistry::standard().check(&fixture.device, &fixture.features);
        assert_eq!(typed.violations.len(), 1);
    }
}

mod backing_types {
    use super::*;

    #[test]
    fn test_is_tracked_bool_round_trip() {
        let device = Device::new(1, "HMD", DeviceRole::Generic);
        let features = vec![FeatureUsage::bool(names::IS_TRACKED)];
        let typed = FeatureTypeRegistry::standard().check(&device, &features);
        assert_eq!(typed, TypeCheck::default());
    }

    #[test]
    fn test_mismatch_names_both_types() {
        let fixture = DeviceFixture::hmd(1).retyped(names::TRACKING_STATE, SemanticType::Float);
        let typed = FeatureTypeRegistry::standard().check(&fixture.device, &fixture.features);
        assert_has_violation!(
            typed.violations,
            ViolationKind::TypeMismatch {
                expected: SemanticType::UInt32,
                observed: SemanticType::Float,
                ..
            }
        );
    }

    #[test]
    fn test_provider_specific_feature_is_informational() {
        let fixture = DeviceFixture::hmd(1).with_feature("EyeOpenness", SemanticType::Float);
        let typed = FeatureTypeRegistry::standard().check(&fixture.device, &fixture.features);
        assert_no_violations!(typed.violations);
        assert_eq!(typed.notices.len(), 1);
    }
}

mod haptics {
    use super::*;

    #[test]
    fn test_optimal_over_max_and_ceiling() {
        let fixture = DeviceFixture::left_controller(2)
            .with_haptics(HapticCapabilities::buffered(320, 5000, 4096));
        let violations = HapticLimits::default().check(&fixture.device, fixture.haptics.as_ref());

        assert_eq!(violations.len(), 2);
        assert_has_violation!(
            violations,
            ViolationKind::HapticOptimalExceedsMax { optimal: 5000, max: 4096 }
        );
        assert_has_violation!(
            violations,
            ViolationKind::HapticBufferExceedsCeiling { value: 5000, ceiling: MAX_HAPTIC_BUFFER, .. }
        );
    }

    #[test]
    fn test_frequency_without_buffer() {
        let caps = HapticCapabilities {
            buffer_frequency_hz: 1,
            ..HapticCapabilities::impulse_only(1)
        };
        let device = Device::new(2, "Controller", DeviceRole::LeftHanded);
        let violations = HapticLimits::default().check(&device, Some(&caps));
        assert_eq!(violations.len(), 1);
        assert_has_violation!(
            violations,
            ViolationKind::HapticFieldWithoutBuffer { value: 1, field } if field == "bufferFrequencyHz"
        );
    }
}

mod enumeration {
    use super::*;

    fn abc() -> (Device, Device, Device) {
        (
            Device::new(1, "A", DeviceRole::Generic).in_subsystem(SubsystemId(1)),
            Device::new(2, "B", DeviceRole::LeftHanded).in_subsystem(SubsystemId(1)),
            Device::new(3, "C", DeviceRole::RightHanded).in_subsystem(SubsystemId(2)),
        )
    }

    #[test]
    fn test_exact_partition() {
        let (a, b, c) = abc();
        let listings = vec![
            SubsystemListing::new(Subsystem::new(1, "First-Input"), vec![a.clone(), b.clone()]),
            SubsystemListing::new(Subsystem::new(2, "Second-Input"), vec![c.clone()]),
        ];
        assert_no_violations!(check_consistency(&[a, b, c], &listings));
    }

    #[test]
    fn test_device_claimed_twice() {
        let (a, b, c) = abc();
        let b_again = b.clone().in_subsystem(SubsystemId(2));
        let listings = vec![
            SubsystemListing::new(Subsystem::new(1, "First-Input"), vec![a.clone(), b.clone()]),
            SubsystemListing::new(Subsystem::new(2, "Second-Input"), vec![b_again]),
        ];
        let violations = check_consistency(&[a, b, c], &listings);

        assert_violation_count!(violations, ViolationKind::DuplicateClaim { .. }, 1);
        assert_violation_count!(violations, ViolationKind::UnclaimedDevice, 1);
    }

    #[test]
    fn test_device_claimed_twice_keeps_first_back_reference() {
        let (a, b, c) = abc();
        let listings = vec![
            SubsystemListing::new(Subsystem::new(1, "First-Input"), vec![a.clone(), b.clone()]),
            SubsystemListing::new(Subsystem::new(2, "Second-Input"), vec![b.clone()]),
        ];
        let found: Vec<(String, ViolationKind)> = check_consistency(&[a, b, c], &listings)
            .into_iter()
            .map(|v| (v.device_name, v.kind))
            .collect();

        assert_eq!(
            found,
            vec![
                (
                    "B".to_string(),
                    ViolationKind::WrongSubsystem {
                        expected: "Second-Input".to_string(),
                        reported: Some(SubsystemId(1)),
                    }
                ),
                (
                    "B".to_string(),
                    ViolationKind::DuplicateClaim {
                        subsystem: "Second-Input".to_string(),
                    }
                ),
                ("C".to_string(), ViolationKind::UnclaimedDevice),
            ]
        );
    }

    #[test]
    fn test_uncovered_devices() {
        let (a, b, c) = abc();
        let listings = vec![SubsystemListing::new(
            Subsystem::new(1, "First-Input"),
            vec![a.clone()],
        )];
        let violations = check_consistency(&[a, b, c], &listings);

        assert_eq!(violations.len(), 2);
        assert_violation_count!(violations, ViolationKind::UnclaimedDevice, 2);
        let names: Vec<&str> = violations.iter().map(|v| v.device_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}
