//! One consistent capture of provider state per pass.
//!
//! Validators only see the captured snapshot, so they can never observe a
//! provider whose device set changes mid-pass.

use std::collections::BTreeMap;

use tracing::warn;
use xrinput_device_types::{Device, DeviceId, FeatureUsage, HapticCapabilities};
use xrinput_errors::ProviderError;
use xrinput_rules::{SubsystemListing, Violation, ViolationKind};

use crate::provider::{InputProvider, query};

/// Which parts of provider state to capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureScope {
    pub features: bool,
    pub haptics: bool,
    pub listings: bool,
}

impl CaptureScope {
    pub fn everything() -> Self {
        Self {
            features: true,
            haptics: true,
            listings: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSnapshot {
    /// `None` when the global list query failed.
    pub devices: Option<Vec<Device>>,
    pub features: BTreeMap<DeviceId, Vec<FeatureUsage>>,
    pub haptics: BTreeMap<DeviceId, HapticCapabilities>,
    /// `None` when not captured or when any listing query failed.
    pub listings: Option<Vec<SubsystemListing>>,
    /// Provider queries that failed, already turned into violations.
    pub failures: Vec<Violation>,
}

/// Prefer the query name carried by the error over the one attempted.
fn query_failed(err: &ProviderError, attempted: &str) -> ViolationKind {
    match err {
        ProviderError::QueryFailed { query, reason } => ViolationKind::ProviderQueryFailed {
            query: query.clone(),
            reason: reason.clone(),
        },
        other => ViolationKind::ProviderQueryFailed {
            query: attempted.to_string(),
            reason: other.to_string(),
        },
    }
}

impl ProviderSnapshot {
    pub fn capture<P>(provider: &P, scope: CaptureScope) -> Self
    where
        P: InputProvider + ?Sized,
    {
        let mut snapshot = Self::default();

        match provider.list_devices() {
            Ok(devices) => snapshot.devices = Some(devices),
            Err(err) => {
                warn!(error = %err, "Provider failed to list devices");
                snapshot.failures.push(Violation::pass_wide(query_failed(
                    &err,
                    query::LIST_DEVICES,
                )));
            }
        }

        let devices = snapshot.devices.clone().unwrap_or_default();
        for device in &devices {
            if scope.features {
                match provider.feature_usages(device.id) {
                    Ok(features) => {
                        snapshot.features.insert(device.id, features);
                    }
                    Err(err) => snapshot.record_device_failure(device, &err, query::FEATURE_USAGES),
                }
            }
            if scope.haptics {
                match provider.haptic_capabilities(device.id) {
                    Ok(Some(caps)) => {
                        snapshot.haptics.insert(device.id, caps);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        snapshot.record_device_failure(device, &err, query::HAPTIC_CAPABILITIES)
                    }
                }
            }
        }

        if scope.listings {
            snapshot.listings = snapshot.capture_listings(provider);
        }
        snapshot
    }

    fn capture_listings<P>(&mut self, provider: &P) -> Option<Vec<SubsystemListing>>
    where
        P: InputProvider + ?Sized,
    {
        let subsystems = match provider.list_subsystems() {
            Ok(subsystems) => subsystems,
            Err(err) => {
                warn!(error = %err, "Provider failed to list subsystems");
                self.failures
                    .push(Violation::pass_wide(query_failed(&err, query::LIST_SUBSYSTEMS)));
                return None;
            }
        };

        let mut listings = Vec::with_capacity(subsystems.len());
        let mut complete = true;
        for subsystem in subsystems {
            match provider.subsystem_devices(subsystem.id) {
                Ok(devices) => listings.push(SubsystemListing::new(subsystem, devices)),
                Err(err) => {
                    warn!(
                        subsystem = %subsystem,
                        error = %err,
                        "Provider failed to list subsystem devices"
                    );
                    self.failures.push(Violation::named(
                        subsystem.descriptor_id.as_str(),
                        query_failed(&err, query::SUBSYSTEM_DEVICES),
                    ));
                    complete = false;
                }
            }
        }
        complete.then_some(listings)
    }

    fn record_device_failure(&mut self, device: &Device, err: &ProviderError, query: &str) {
        warn!(
            device = %device,
            query,
            severity = %err.severity(),
            error = %err,
            "Provider query failed"
        );
        self.failures
            .push(Violation::for_device(device, query_failed(err, query)));
    }

    pub fn device_list(&self) -> &[Device] {
        self.devices.as_deref().unwrap_or_default()
    }

    pub fn features_of(&self, device: DeviceId) -> Option<&[FeatureUsage]> {
        self.features.get(&device).map(Vec::as_slice)
    }

    pub fn haptics_of(&self, device: DeviceId) -> Option<&HapticCapabilities> {
        self.haptics.get(&device)
    }
}
