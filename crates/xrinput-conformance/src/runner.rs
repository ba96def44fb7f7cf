//! Orchestration of a conformance pass.

use std::collections::BTreeSet;

use tracing::{debug, info};
use xrinput_device_types::{Device, FeatureUsage};
use xrinput_rules::{
    Check, FeatureTypeRegistry, FeatureView, HapticLimits, ImplicationRuleSet, MAX_HAPTIC_BUFFER,
    RoleRequirementTable, Violation, ViolationKind, check_consistency, check_unique,
};

use crate::config::ConformanceConfig;
use crate::expectation::check_expected;
use crate::provider::InputProvider;
use crate::report::ConformanceReport;
use crate::snapshot::{CaptureScope, ProviderSnapshot};

/// Which checks to run and against which limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    pub checks: BTreeSet<Check>,
    pub haptic_buffer_ceiling: u32,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            checks: Check::ALL.into_iter().collect(),
            haptic_buffer_ceiling: MAX_HAPTIC_BUFFER,
        }
    }
}

impl RunnerOptions {
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks = checks.into_iter().collect();
        self
    }

    pub fn with_haptic_buffer_ceiling(mut self, ceiling: u32) -> Self {
        self.haptic_buffer_ceiling = ceiling;
        self
    }
}

fn capture_scope(checks: &BTreeSet<Check>) -> CaptureScope {
    CaptureScope {
        features: checks.iter().any(Check::needs_features),
        haptics: checks.contains(&Check::HapticCapabilities),
        listings: checks.contains(&Check::SubsystemEnumeration),
    }
}

/// Runs the validators over one provider snapshot per pass.
#[derive(Debug, Clone)]
pub struct ConformanceRunner {
    registry: FeatureTypeRegistry,
    implications: ImplicationRuleSet,
    roles: RoleRequirementTable,
    haptics: HapticLimits,
    options: RunnerOptions,
    config: Option<ConformanceConfig>,
}

impl Default for ConformanceRunner {
    fn default() -> Self {
        Self::new(RunnerOptions::default())
    }
}

impl ConformanceRunner {
    pub fn new(options: RunnerOptions) -> Self {
        Self {
            registry: FeatureTypeRegistry::standard(),
            implications: ImplicationRuleSet::standard(),
            roles: RoleRequirementTable::standard(),
            haptics: HapticLimits::with_ceiling(options.haptic_buffer_ceiling),
            options,
            config: None,
        }
    }

    /// Attach the expected-configuration descriptor, if there is one.
    pub fn with_config(mut self, config: Option<ConformanceConfig>) -> Self {
        self.config = config;
        self
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    pub fn config(&self) -> Option<&ConformanceConfig> {
        self.config.as_ref()
    }

    /// Run every selected check.
    pub fn run<P>(&self, provider: &P) -> ConformanceReport
    where
        P: InputProvider + ?Sized,
    {
        let checks: Vec<Check> = self.options.checks.iter().copied().collect();
        self.run_checks(provider, &checks)
    }

    /// Run only `checks`, in [`Check::ALL`] order.
    pub fn run_checks<P>(&self, provider: &P, checks: &[Check]) -> ConformanceReport
    where
        P: InputProvider + ?Sized,
    {
        let selected: BTreeSet<Check> = checks.iter().copied().collect();
        let snapshot = ProviderSnapshot::capture(provider, capture_scope(&selected));
        let devices = snapshot.device_list();

        let mut report = ConformanceReport {
            violations: snapshot.failures.clone(),
            devices_checked: devices.len(),
            ..ConformanceReport::default()
        };

        // A failed device list is already reported as a query failure; checks
        // against the whole device set have nothing to compare with.
        let listed = snapshot.devices.is_some();
        if listed && devices.is_empty() && selected.iter().any(|check| check.needs_devices()) {
            report
                .violations
                .push(Violation::pass_wide(ViolationKind::NoDevicesFound));
        }

        if selected.contains(&Check::Configuration) {
            if listed {
                self.check_configuration(devices, &mut report);
            } else {
                debug!("Device list unavailable; configuration check skipped");
            }
        }

        for device in devices {
            *report.role_counts.entry(device.role).or_insert(0) += 1;
            self.check_device(device, &snapshot, &selected, &mut report);
        }

        if selected.contains(&Check::SubsystemEnumeration) {
            match &snapshot.listings {
                Some(listings) if listed => report
                    .violations
                    .extend(check_consistency(devices, listings)),
                Some(_) => debug!("Device list unavailable; enumeration check skipped"),
                None => debug!("Subsystem listings unavailable; enumeration check skipped"),
            }
        }

        info!(
            devices = report.devices_checked,
            violations = report.violations.len(),
            notices = report.notices.len(),
            checks = selected.len(),
            pass = report.is_pass(),
            "Conformance pass complete"
        );
        report
    }

    fn check_configuration(&self, devices: &[Device], report: &mut ConformanceReport) {
        let Some(config) = &self.config else {
            info!("No configuration descriptor; observed devices are taken as expected");
            return;
        };
        let Some(expected) = config.expected_device_names() else {
            info!("Descriptor names no expected devices; observed devices are taken as expected");
            return;
        };
        info!(expected = ?expected, "Expected device configuration");
        info!(
            observed = ?devices.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            "Observed device configuration"
        );
        report.violations.extend(check_expected(expected, devices));
    }

    fn check_device(
        &self,
        device: &Device,
        snapshot: &ProviderSnapshot,
        selected: &BTreeSet<Check>,
        report: &mut ConformanceReport,
    ) {
        if selected.iter().any(Check::needs_features) {
            match snapshot.features_of(device.id) {
                Some([]) => {
                    debug!(device = %device, "Device has no feature usages; feature checks skipped")
                }
                Some(features) => self.check_features(device, features, selected, report),
                None => debug!(device = %device, "Feature usages unavailable"),
            }
        }

        if selected.contains(&Check::HapticCapabilities) {
            report
                .violations
                .extend(self.haptics.check(device, snapshot.haptics_of(device.id)));
        }
    }

    fn check_features(
        &self,
        device: &Device,
        features: &[FeatureUsage],
        selected: &BTreeSet<Check>,
        report: &mut ConformanceReport,
    ) {
        let view = FeatureView::new(device, features);
        for check in selected {
            debug!(device = %device, check = %check, "Running check");
            match check {
                Check::RelatedUsages | Check::TrackedDevice => report
                    .violations
                    .extend(self.implications.evaluate_check(&view, *check)),
                Check::RoleRequirements => report.violations.extend(self.roles.check(&view)),
                Check::UniqueUsages => report.violations.extend(check_unique(&view)),
                Check::BackingTypes => {
                    let typed = self.registry.check(device, features);
                    for notice in &typed.notices {
                        info!(
                            device = %notice.device_name,
                            feature = %notice.feature,
                            value_type = %notice.value_type,
                            "Provider specific feature detected; its backing value type cannot be verified"
                        );
                    }
                    report.violations.extend(typed.violations);
                    report.notices.extend(typed.notices);
                }
                Check::Configuration | Check::HapticCapabilities | Check::SubsystemEnumeration => {}
            }
        }
    }
}
