//! Feature type registry: the common usage vocabulary and its value types.
//!
//! The vocabulary is an explicit compile-time table. A name that is not in
//! it is a provider-specific extension and only produces a [`Notice`].

use std::collections::HashMap;
use std::sync::OnceLock;

use xrinput_device_types::{Device, FeatureUsage, SemanticType};

use crate::{Notice, Violation, ViolationKind};

macro_rules! common_usages {
    ($( $konst:ident = $name:literal : $ty:ident ),* $(,)?) => {
        /// Names of the common feature usages.
        pub mod names {
            $( pub const $konst: &str = $name; )*
        }

        /// Every common usage with its registered value type.
        pub const COMMON_USAGES: &[(&str, SemanticType)] = &[
            $( (names::$konst, SemanticType::$ty), )*
        ];
    };
}

common_usages! {
    TRACKING_STATE = "TrackingState": UInt32,

    IS_TRACKED = "IsTracked": Bool,
    PRIMARY_BUTTON = "PrimaryButton": Bool,
    PRIMARY_TOUCH = "PrimaryTouch": Bool,
    SECONDARY_BUTTON = "SecondaryButton": Bool,
    SECONDARY_TOUCH = "SecondaryTouch": Bool,
    GRIP_BUTTON = "GripButton": Bool,
    TRIGGER_BUTTON = "TriggerButton": Bool,
    MENU_BUTTON = "MenuButton": Bool,
    PRIMARY_2D_AXIS_CLICK = "Primary2DAxisClick": Bool,
    PRIMARY_2D_AXIS_TOUCH = "Primary2DAxisTouch": Bool,
    SECONDARY_2D_AXIS_CLICK = "Secondary2DAxisClick": Bool,
    SECONDARY_2D_AXIS_TOUCH = "Secondary2DAxisTouch": Bool,
    THUMBREST = "Thumbrest": Bool,
    USER_PRESENCE = "UserPresence": Bool,

    TRIGGER = "Trigger": Float,
    GRIP = "Grip": Float,
    INDEX_TOUCH = "IndexTouch": Float,
    THUMB_TOUCH = "ThumbTouch": Float,
    INDEX_FINGER = "IndexFinger": Float,
    MIDDLE_FINGER = "MiddleFinger": Float,
    RING_FINGER = "RingFinger": Float,
    PINKY_FINGER = "PinkyFinger": Float,
    BATTERY_LEVEL = "BatteryLevel": Float,

    PRIMARY_2D_AXIS = "Primary2DAxis": Vector2,
    SECONDARY_2D_AXIS = "Secondary2DAxis": Vector2,

    DEVICE_POSITION = "DevicePosition": Vector3,
    DEVICE_VELOCITY = "DeviceVelocity": Vector3,
    DEVICE_ACCELERATION = "DeviceAcceleration": Vector3,
    DEVICE_ANGULAR_VELOCITY = "DeviceAngularVelocity": Vector3,
    DEVICE_ANGULAR_ACCELERATION = "DeviceAngularAcceleration": Vector3,
    COLOR_CAMERA_POSITION = "ColorCameraPosition": Vector3,
    COLOR_CAMERA_VELOCITY = "ColorCameraVelocity": Vector3,
    COLOR_CAMERA_ACCELERATION = "ColorCameraAcceleration": Vector3,
    COLOR_CAMERA_ANGULAR_VELOCITY = "ColorCameraAngularVelocity": Vector3,
    COLOR_CAMERA_ANGULAR_ACCELERATION = "ColorCameraAngularAcceleration": Vector3,
    CENTER_EYE_POSITION = "CenterEyePosition": Vector3,
    CENTER_EYE_VELOCITY = "CenterEyeVelocity": Vector3,
    CENTER_EYE_ACCELERATION = "CenterEyeAcceleration": Vector3,
    CENTER_EYE_ANGULAR_VELOCITY = "CenterEyeAngularVelocity": Vector3,
    CENTER_EYE_ANGULAR_ACCELERATION = "CenterEyeAngularAcceleration": Vector3,
    LEFT_EYE_POSITION = "LeftEyePosition": Vector3,
    LEFT_EYE_VELOCITY = "LeftEyeVelocity": Vector3,
    LEFT_EYE_ACCELERATION = "LeftEyeAcceleration": Vector3,
    LEFT_EYE_ANGULAR_VELOCITY = "LeftEyeAngularVelocity": Vector3,
    LEFT_EYE_ANGULAR_ACCELERATION = "LeftEyeAngularAcceleration": Vector3,
    RIGHT_EYE_POSITION = "RightEyePosition": Vector3,
    RIGHT_EYE_VELOCITY = "RightEyeVelocity": Vector3,
    RIGHT_EYE_ACCELERATION = "RightEyeAcceleration": Vector3,
    RIGHT_EYE_ANGULAR_VELOCITY = "RightEyeAngularVelocity": Vector3,
    RIGHT_EYE_ANGULAR_ACCELERATION = "RightEyeAngularAcceleration": Vector3,

    DEVICE_ROTATION = "DeviceRotation": Quaternion,
    COLOR_CAMERA_ROTATION = "ColorCameraRotation": Quaternion,
    CENTER_EYE_ROTATION = "CenterEyeRotation": Quaternion,
    LEFT_EYE_ROTATION = "LeftEyeRotation": Quaternion,
    RIGHT_EYE_ROTATION = "RightEyeRotation": Quaternion,
}

/// Result of a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered(SemanticType),
    /// Provider-specific name, not part of the common vocabulary.
    Unregistered,
}

/// Outcome of type-checking one device's features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCheck {
    pub violations: Vec<Violation>,
    pub notices: Vec<Notice>,
}

/// Maps feature names to their expected value type.
#[derive(Debug, Clone, Copy)]
pub struct FeatureTypeRegistry {
    index: &'static HashMap<&'static str, SemanticType>,
}

impl Default for FeatureTypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FeatureTypeRegistry {
    /// Registry over [`COMMON_USAGES`], built once per process.
    pub fn standard() -> Self {
        static INDEX: OnceLock<HashMap<&'static str, SemanticType>> = OnceLock::new();
        Self {
            index: INDEX.get_or_init(|| COMMON_USAGES.iter().copied().collect()),
        }
    }

    pub fn expected_type(&self, name: &str) -> Registration {
        match self.index.get(name) {
            Some(ty) => Registration::Registered(*ty),
            None => Registration::Unregistered,
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check every usage of a device against its registered type.
    ///
    /// Duplicated names are checked once per occurrence.
    pub fn check(&self, device: &Device, features: &[FeatureUsage]) -> TypeCheck {
        let mut outcome = TypeCheck::default();
        for usage in features {
            match self.expected_type(&usage.name) {
                Registration::Registered(expected) if expected != usage.value_type => {
                    outcome.violations.push(Violation::for_device(
                        device,
                        ViolationKind::TypeMismatch {
                            feature: usage.name.clone(),
                            expected,
                            observed: usage.value_type,
                        },
                    ));
                }
                Registration::Registered(_) => {}
                Registration::Unregistered => outcome.notices.push(Notice {
                    device_name: device.name.clone(),
                    feature: usage.name.clone(),
                    value_type: usage.value_type,
                }),
            }
        }
        outcome
    }
}
