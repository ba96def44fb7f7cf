//! In-memory provider backed by a JSON snapshot.
//!
//! ```json
//! {
//!   "subsystems": [{ "id": 1, "descriptor_id": "MockProvider-Input" }],
//!   "devices": [{
//!     "id": 1, "name": "Mock HMD", "role": "Generic",
//!     "characteristics": "HEAD_MOUNTED | TRACKED_DEVICE", "subsystem": 1,
//!     "features": [{ "name": "IsTracked", "type": "Bool" }]
//!   }]
//! }
//! ```
//!
//! A device with `"global": false` is hidden from the global list but still
//! reachable through its subsystem. `listings` overrides the per-subsystem
//! device lists, which are otherwise derived from each device's `subsystem`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xrinput_device_types::{
    Device, DeviceId, FeatureUsage, HapticCapabilities, Subsystem, SubsystemId,
};
use xrinput_errors::{ConfigError, ProviderError, ProviderResult};

use crate::provider::{InputProvider, query};

/// One device with everything the provider reports about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(flatten)]
    pub device: Device,
    #[serde(default)]
    pub features: Vec<FeatureUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptics: Option<HapticCapabilities>,
    #[serde(default = "default_global")]
    pub global: bool,
}

fn default_global() -> bool {
    true
}

impl DeviceRecord {
    pub fn new(device: Device, features: Vec<FeatureUsage>) -> Self {
        Self {
            device,
            features,
            haptics: None,
            global: true,
        }
    }
}

/// Explicit device list of one subsystem, by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub subsystem: SubsystemId,
    pub devices: Vec<DeviceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotProvider {
    #[serde(default)]
    pub subsystems: Vec<Subsystem>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listings: Option<Vec<ListingRecord>>,
    #[serde(skip)]
    failing: BTreeSet<&'static str>,
}

impl SnapshotProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::parse(origin, err.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|err| ConfigError::io(&shown, err))?;
        Self::from_json_str(&json, &shown)
    }

    pub fn with_subsystem(mut self, subsystem: Subsystem) -> Self {
        self.subsystems.push(subsystem);
        self
    }

    pub fn with_device(
        mut self,
        device: Device,
        features: Vec<FeatureUsage>,
        haptics: Option<HapticCapabilities>,
    ) -> Self {
        self.devices.push(DeviceRecord {
            haptics,
            ..DeviceRecord::new(device, features)
        });
        self
    }

    /// Add a device only its subsystem reports.
    pub fn with_hidden_device(mut self, device: Device) -> Self {
        self.devices.push(DeviceRecord {
            global: false,
            ..DeviceRecord::new(device, Vec::new())
        });
        self
    }

    pub fn with_listing(mut self, subsystem: SubsystemId, devices: Vec<DeviceId>) -> Self {
        self.listings
            .get_or_insert_with(Vec::new)
            .push(ListingRecord { subsystem, devices });
        self
    }

    /// Make every call of `query` (see [`query`]) fail.
    pub fn failing(mut self, query: &'static str) -> Self {
        self.failing.insert(query);
        self
    }

    fn guard(&self, name: &'static str) -> ProviderResult<()> {
        if self.failing.contains(name) {
            return Err(ProviderError::query_failed(name, "injected failure"));
        }
        Ok(())
    }

    fn record(&self, id: DeviceId) -> ProviderResult<&DeviceRecord> {
        self.devices
            .iter()
            .find(|record| record.device.id == id)
            .ok_or_else(|| ProviderError::unknown_device(id.to_string()))
    }
}

impl InputProvider for SnapshotProvider {
    fn list_devices(&self) -> ProviderResult<Vec<Device>> {
        self.guard(query::LIST_DEVICES)?;
        Ok(self
            .devices
            .iter()
            .filter(|record| record.global)
            .map(|record| record.device.clone())
            .collect())
    }

    fn feature_usages(&self, device: DeviceId) -> ProviderResult<Vec<FeatureUsage>> {
        self.guard(query::FEATURE_USAGES)?;
        Ok(self.record(device)?.features.clone())
    }

    fn haptic_capabilities(&self, device: DeviceId) -> ProviderResult<Option<HapticCapabilities>> {
        self.guard(query::HAPTIC_CAPABILITIES)?;
        Ok(self.record(device)?.haptics)
    }

    fn list_subsystems(&self) -> ProviderResult<Vec<Subsystem>> {
        self.guard(query::LIST_SUBSYSTEMS)?;
        Ok(self.subsystems.clone())
    }

    fn subsystem_devices(&self, subsystem: SubsystemId) -> ProviderResult<Vec<Device>> {
        self.guard(query::SUBSYSTEM_DEVICES)?;
        if !self.subsystems.iter().any(|s| s.id == subsystem) {
            return Err(ProviderError::unknown_subsystem(subsystem.to_string()));
        }
        match &self.listings {
            Some(listings) => listings
                .iter()
                .filter(|listing| listing.subsystem == subsystem)
                .flat_map(|listing| listing.devices.iter())
                .map(|id| self.record(*id).map(|record| record.device.clone()))
                .collect(),
            None => Ok(self
                .devices
                .iter()
                .filter(|record| record.device.subsystem == Some(subsystem))
                .map(|record| record.device.clone())
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrinput_device_types::DeviceRole;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const SNAPSHOT: &str = r#"{
        "subsystems": [{ "id": 1, "descriptor_id": "MockProvider-Input" }],
        "devices": [
            {
                "id": 1, "name": "Mock HMD", "role": "Generic",
                "characteristics": "HEAD_MOUNTED | TRACKED_DEVICE", "subsystem": 1,
                "features": [{ "name": "IsTracked", "type": "Bool" }]
            },
            {
                "id": 2, "name": "Mock Controller", "role": "LeftHanded", "subsystem": 1,
                "haptics": { "supports_buffer": true, "buffer_frequency_hz": 320,
                             "buffer_optimal_size": 32, "buffer_max_size": 1024 }
            },
            { "id": 3, "name": "Hidden", "subsystem": 1, "global": false }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() -> TestResult {
        let provider = SnapshotProvider::from_json_str(SNAPSHOT, "inline")?;

        let devices = provider.list_devices()?;
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].role, DeviceRole::Generic);
        assert_eq!(provider.feature_usages(DeviceId(1))?.len(), 1);
        assert!(provider.feature_usages(DeviceId(2))?.is_empty());
        assert!(provider.haptic_capabilities(DeviceId(1))?.is_none());
        assert!(provider.haptic_capabilities(DeviceId(2))?.is_some());

        let listed = provider.subsystem_devices(SubsystemId(1))?;
        assert_eq!(listed.len(), 3);
        Ok(())
    }

    #[test]
    fn test_listing_override() -> TestResult {
        let provider = SnapshotProvider::from_json_str(SNAPSHOT, "inline")?
            .with_listing(SubsystemId(1), vec![DeviceId(2), DeviceId(2)]);
        let listed: Vec<DeviceId> = provider
            .subsystem_devices(SubsystemId(1))?
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(listed, vec![DeviceId(2), DeviceId(2)]);
        Ok(())
    }

    #[test]
    fn test_unknown_ids() {
        let provider = SnapshotProvider::new();
        assert!(matches!(
            provider.feature_usages(DeviceId(9)),
            Err(ProviderError::UnknownDevice(_))
        ));
        assert!(matches!(
            provider.subsystem_devices(SubsystemId(9)),
            Err(ProviderError::UnknownSubsystem(_))
        ));
    }

    #[test]
    fn test_injected_failure() {
        let provider = SnapshotProvider::new().failing(query::LIST_DEVICES);
        assert_eq!(
            provider.list_devices(),
            Err(ProviderError::query_failed("listDevices", "injected failure"))
        );
    }

    #[test]
    fn test_malformed_snapshot() {
        let result = SnapshotProvider::from_json_str("{ \"devices\": 4 }", "broken.json");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
