//! Conformant device fixtures.
//!
//! Every builder returns a device that passes the full rule set on its
//! own; tests then add, drop or retype one feature to provoke exactly the
//! violation they are after.

use xrinput_device_types::{
    Device, DeviceCharacteristics, DeviceRole, FeatureUsage, HapticCapabilities, SemanticType,
    SubsystemId,
};

/// A device plus everything a provider would report about it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceFixture {
    pub device: Device,
    pub features: Vec<FeatureUsage>,
    pub haptics: Option<HapticCapabilities>,
}

const TRACKING: &[(&str, SemanticType)] = &[
    ("IsTracked", SemanticType::Bool),
    ("TrackingState", SemanticType::UInt32),
    ("DevicePosition", SemanticType::Vector3),
    ("DeviceRotation", SemanticType::Quaternion),
];

const HMD_EXTRAS: &[(&str, SemanticType)] = &[
    ("CenterEyePosition", SemanticType::Vector3),
    ("CenterEyeRotation", SemanticType::Quaternion),
    ("LeftEyePosition", SemanticType::Vector3),
    ("LeftEyeRotation", SemanticType::Quaternion),
    ("RightEyePosition", SemanticType::Vector3),
    ("RightEyeRotation", SemanticType::Quaternion),
    ("UserPresence", SemanticType::Bool),
];

const CONTROLLER_EXTRAS: &[(&str, SemanticType)] = &[
    ("DeviceVelocity", SemanticType::Vector3),
    ("DeviceAngularVelocity", SemanticType::Vector3),
    ("Trigger", SemanticType::Float),
    ("TriggerButton", SemanticType::Bool),
    ("Grip", SemanticType::Float),
    ("GripButton", SemanticType::Bool),
    ("PrimaryButton", SemanticType::Bool),
    ("PrimaryTouch", SemanticType::Bool),
    ("SecondaryButton", SemanticType::Bool),
    ("SecondaryTouch", SemanticType::Bool),
    ("MenuButton", SemanticType::Bool),
    ("Primary2DAxis", SemanticType::Vector2),
    ("Primary2DAxisClick", SemanticType::Bool),
    ("Primary2DAxisTouch", SemanticType::Bool),
    ("BatteryLevel", SemanticType::Float),
];

fn usages(tables: &[&[(&str, SemanticType)]]) -> Vec<FeatureUsage> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|(name, ty)| FeatureUsage::new(*name, *ty))
        .collect()
}

impl DeviceFixture {
    pub fn new(device: Device, features: Vec<FeatureUsage>) -> Self {
        Self {
            device,
            features,
            haptics: None,
        }
    }

    /// Head-mounted display.
    pub fn hmd(id: u64) -> Self {
        let device = Device::new(id, "Mock HMD", DeviceRole::Generic).with_characteristics(
            DeviceCharacteristics::HEAD_MOUNTED | DeviceCharacteristics::TRACKED_DEVICE,
        );
        Self::new(device, usages(&[TRACKING, HMD_EXTRAS]))
    }

    pub fn left_controller(id: u64) -> Self {
        Self::controller(id, "Mock Left Controller", DeviceRole::LeftHanded)
    }

    pub fn right_controller(id: u64) -> Self {
        Self::controller(id, "Mock Right Controller", DeviceRole::RightHanded)
    }

    fn controller(id: u64, name: &str, role: DeviceRole) -> Self {
        let side = if role == DeviceRole::LeftHanded {
            DeviceCharacteristics::LEFT
        } else {
            DeviceCharacteristics::RIGHT
        };
        let device = Device::new(id, name, role).with_characteristics(
            DeviceCharacteristics::HELD_IN_HAND
                | DeviceCharacteristics::TRACKED_DEVICE
                | DeviceCharacteristics::CONTROLLER
                | side,
        );
        Self::new(device, usages(&[TRACKING, CONTROLLER_EXTRAS]))
            .with_haptics(HapticCapabilities::buffered(320, 32, 1024))
    }

    pub fn hardware_tracker(id: u64) -> Self {
        let device = Device::new(id, "Mock Tracker", DeviceRole::HardwareTracker)
            .with_characteristics(DeviceCharacteristics::TRACKED_DEVICE);
        Self::new(device, usages(&[TRACKING]))
    }

    pub fn tracking_reference(id: u64) -> Self {
        let device = Device::new(id, "Mock Base Station", DeviceRole::TrackingReference)
            .with_characteristics(
                DeviceCharacteristics::TRACKED_DEVICE | DeviceCharacteristics::TRACKING_REFERENCE,
            );
        Self::new(device, usages(&[TRACKING]))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.device.name = name.into();
        self
    }

    pub fn in_subsystem(mut self, subsystem: SubsystemId) -> Self {
        self.device.subsystem = Some(subsystem);
        self
    }

    pub fn with_characteristics(mut self, characteristics: DeviceCharacteristics) -> Self {
        self.device.characteristics = characteristics;
        self
    }

    pub fn with_feature(mut self, name: impl Into<String>, value_type: SemanticType) -> Self {
        self.features.push(FeatureUsage::new(name, value_type));
        self
    }

    /// Remove every usage with this name.
    pub fn without_feature(mut self, name: &str) -> Self {
        self.features.retain(|usage| usage.name != name);
        self
    }

    /// Change the value type of every usage with this name.
    pub fn retyped(mut self, name: &str, value_type: SemanticType) -> Self {
        for usage in self.features.iter_mut().filter(|usage| usage.name == name) {
            usage.value_type = value_type;
        }
        self
    }

    pub fn with_haptics(mut self, haptics: HapticCapabilities) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn without_features(mut self) -> Self {
        self.features.clear();
        self
    }

    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|usage| usage.name == name)
    }
}

/// HMD, two controllers, one tracker and one tracking reference, ids 1..=5.
pub fn standard_rig() -> Vec<DeviceFixture> {
    vec![
        DeviceFixture::hmd(1),
        DeviceFixture::left_controller(2),
        DeviceFixture::right_controller(3),
        DeviceFixture::hardware_tracker(4),
        DeviceFixture::tracking_reference(5),
    ]
}
