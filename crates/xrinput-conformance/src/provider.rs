//! Read-only query interface onto a device/feature provider.

use xrinput_device_types::{
    Device, DeviceId, FeatureUsage, HapticCapabilities, Subsystem, SubsystemId,
};
use xrinput_errors::ProviderResult;

/// The external source of devices and their feature usages.
///
/// Every call is answered fresh; the runner captures one snapshot per pass
/// and never caches across passes.
pub trait InputProvider: Send + Sync {
    /// The global device list.
    fn list_devices(&self) -> ProviderResult<Vec<Device>>;

    fn feature_usages(&self, device: DeviceId) -> ProviderResult<Vec<FeatureUsage>>;

    /// `Ok(None)` when the device reports no haptic capabilities.
    fn haptic_capabilities(&self, device: DeviceId) -> ProviderResult<Option<HapticCapabilities>>;

    fn list_subsystems(&self) -> ProviderResult<Vec<Subsystem>>;

    /// Devices reported by one subsystem.
    fn subsystem_devices(&self, subsystem: SubsystemId) -> ProviderResult<Vec<Device>>;
}

impl<P: InputProvider + ?Sized> InputProvider for &P {
    fn list_devices(&self) -> ProviderResult<Vec<Device>> {
        (**self).list_devices()
    }

    fn feature_usages(&self, device: DeviceId) -> ProviderResult<Vec<FeatureUsage>> {
        (**self).feature_usages(device)
    }

    fn haptic_capabilities(&self, device: DeviceId) -> ProviderResult<Option<HapticCapabilities>> {
        (**self).haptic_capabilities(device)
    }

    fn list_subsystems(&self) -> ProviderResult<Vec<Subsystem>> {
        (**self).list_subsystems()
    }

    fn subsystem_devices(&self, subsystem: SubsystemId) -> ProviderResult<Vec<Device>> {
        (**self).subsystem_devices(subsystem)
    }
}

/// Query names used in failure reports.
pub mod query {
    pub const LIST_DEVICES: &str = "listDevices";
    pub const FEATURE_USAGES: &str = "listFeatureUsages";
    pub const HAPTIC_CAPABILITIES: &str = "getHapticCapabilities";
    pub const LIST_SUBSYSTEMS: &str = "listSubsystems";
    pub const SUBSYSTEM_DEVICES: &str = "subsystemDevices";
}
