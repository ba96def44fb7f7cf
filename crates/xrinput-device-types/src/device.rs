//! Device handles, roles and characteristic flags.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Stable opaque identity of a device within one provider snapshot.
///
/// Display names are not unique, so every identity comparison (enumeration
/// consistency in particular) goes through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle of an input subsystem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubsystemId(pub u32);

impl fmt::Display for SubsystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subsystem#{}", self.0)
    }
}

/// An enumeration source that reports a subset of the global device list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subsystem {
    pub id: SubsystemId,
    /// Descriptor identifier used in reports (e.g. `"MockProvider-Input"`).
    pub descriptor_id: String,
}

impl Subsystem {
    pub fn new(id: u32, descriptor_id: impl Into<String>) -> Self {
        Self {
            id: SubsystemId(id),
            descriptor_id: descriptor_id.into(),
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor_id)
    }
}

/// Functional category a device reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum DeviceRole {
    /// Head-mounted display and other generic tracked devices.
    Generic,
    LeftHanded,
    RightHanded,
    GameController,
    TrackingReference,
    HardwareTracker,
    LegacyController,
    #[default]
    Unknown,
}

impl DeviceRole {
    pub const ALL: [DeviceRole; 8] = [
        DeviceRole::Generic,
        DeviceRole::LeftHanded,
        DeviceRole::RightHanded,
        DeviceRole::GameController,
        DeviceRole::TrackingReference,
        DeviceRole::HardwareTracker,
        DeviceRole::LegacyController,
        DeviceRole::Unknown,
    ];

    pub fn is_handed(&self) -> bool {
        matches!(self, DeviceRole::LeftHanded | DeviceRole::RightHanded)
    }
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceRole::Generic => write!(f, "Generic/HMD"),
            DeviceRole::LeftHanded => write!(f, "LeftHanded"),
            DeviceRole::RightHanded => write!(f, "RightHanded"),
            DeviceRole::GameController => write!(f, "GameController"),
            DeviceRole::TrackingReference => write!(f, "TrackingReference"),
            DeviceRole::HardwareTracker => write!(f, "HardwareTracker"),
            DeviceRole::LegacyController => write!(f, "LegacyController"),
            DeviceRole::Unknown => write!(f, "Unknown"),
        }
    }
}

bitflags! {
    /// Capability flags a device reports alongside its role.
    ///
    /// Bit positions follow the platform's characteristic mask so that
    /// snapshots captured from a live runtime can be replayed unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct DeviceCharacteristics: u32 {
        const HEAD_MOUNTED       = 1 << 0;
        const CAMERA             = 1 << 1;
        const HELD_IN_HAND       = 1 << 2;
        const HAND_TRACKING      = 1 << 3;
        const EYE_TRACKING       = 1 << 4;
        const TRACKED_DEVICE     = 1 << 5;
        const CONTROLLER         = 1 << 6;
        const TRACKING_REFERENCE = 1 << 7;
        const LEFT               = 1 << 8;
        const RIGHT              = 1 << 9;
        const SIMULATED_6DOF     = 1 << 10;
    }
}

impl Default for DeviceCharacteristics {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for DeviceCharacteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// A device as reported by the provider.
///
/// The validators only ever read devices; they are produced by a provider
/// snapshot and live for a single conformance pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(default)]
    pub role: DeviceRole,
    #[serde(default)]
    pub characteristics: DeviceCharacteristics,
    /// Back-reference to the subsystem that reported this device.
    #[serde(default)]
    pub subsystem: Option<SubsystemId>,
}

impl Device {
    pub fn new(id: u64, name: impl Into<String>, role: DeviceRole) -> Self {
        Self {
            id: DeviceId(id),
            name: name.into(),
            role,
            characteristics: DeviceCharacteristics::empty(),
            subsystem: None,
        }
    }

    pub fn with_characteristics(mut self, characteristics: DeviceCharacteristics) -> Self {
        self.characteristics = characteristics;
        self
    }

    pub fn in_subsystem(mut self, subsystem: SubsystemId) -> Self {
        self.subsystem = Some(subsystem);
        self
    }

    pub fn is_tracked(&self) -> bool {
        self.characteristics
            .contains(DeviceCharacteristics::TRACKED_DEVICE)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
