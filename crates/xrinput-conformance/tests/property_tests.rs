//! Property-based tests for whole passes.

use proptest::prelude::*;
use xrinput_conformance::prelude::*;
use xrinput_test_helpers::prelude::*;

fn checks() -> impl Strategy<Value = Vec<Check>> {
    prop::sample::subsequence(Check::ALL.to_vec(), 0..=Check::ALL.len())
}

fn mutated_rig() -> impl Strategy<Value = SnapshotProvider> {
    prop::collection::vec((any::<bool>(), 0usize..19), 5).prop_map(|mutations| {
        standard_rig()
            .into_iter()
            .zip(mutations)
            .fold(
                SnapshotProvider::new().with_subsystem(Subsystem::new(1, "Mock-Input")),
                |provider, (fixture, (drop, index))| {
                    let mut fixture = fixture.in_subsystem(SubsystemId(1));
                    if drop && let Some(name) = fixture.features.get(index).map(|u| u.name.clone()) {
                        fixture = fixture.without_feature(&name);
                    }
                    provider.with_device(fixture.device, fixture.features, fixture.haptics)
                },
            )
    })
}

proptest! {
    #[test]
    fn test_runs_are_identical(provider in mutated_rig(), selected in checks()) {
        let runner = ConformanceRunner::default();
        prop_assert_eq!(
            runner.run_checks(&provider, &selected),
            runner.run_checks(&provider, &selected)
        );
    }

    #[test]
    fn test_violations_belong_to_selected_checks(provider in mutated_rig(), selected in checks()) {
        let report = ConformanceRunner::default().run_checks(&provider, &selected);
        for violation in &report.violations {
            if let Some(check) = violation.check() {
                prop_assert!(selected.contains(&check), "{} not selected", check);
            }
        }
    }

    #[test]
    fn test_full_pass_is_union_of_single_checks(provider in mutated_rig()) {
        let runner = ConformanceRunner::default();
        let full = runner.run(&provider);
        let summed: usize = Check::ALL
            .iter()
            .map(|check| runner.run_checks(&provider, &[*check]).violations.len())
            .sum();
        prop_assert_eq!(full.violations.len(), summed);
    }
}
