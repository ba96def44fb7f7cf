//! Read-only view of one device and its feature usages.

use std::collections::HashSet;

use xrinput_device_types::{Device, DeviceCharacteristics, FeatureUsage};

/// A device together with its feature usages, indexed by name.
///
/// Rules are evaluated against the full feature-name set of one device,
/// so the set is built once per device and shared by every rule.
#[derive(Debug, Clone)]
pub struct FeatureView<'a> {
    device: &'a Device,
    features: &'a [FeatureUsage],
    names: HashSet<&'a str>,
}

impl<'a> FeatureView<'a> {
    pub fn new(device: &'a Device, features: &'a [FeatureUsage]) -> Self {
        Self {
            device,
            features,
            names: features.iter().map(|usage| usage.name.as_str()).collect(),
        }
    }

    pub fn device(&self) -> &'a Device {
        self.device
    }

    pub fn features(&self) -> &'a [FeatureUsage] {
        self.features
    }

    /// Exact, case-sensitive name lookup.
    pub fn has_feature(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn has_characteristic(&self, flags: DeviceCharacteristics) -> bool {
        self.device.characteristics.contains(flags)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
