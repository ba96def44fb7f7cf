//! Common imports for running conformance passes.

pub use crate::{
    ConformanceConfig, ConformanceReport, ConformanceRunner, FrameSource, InputProvider,
    IntervalFrameSource, RunnerOptions, SnapshotProvider, settle,
};
pub use xrinput_device_types::{
    Device, DeviceCharacteristics, DeviceId, DeviceRole, FeatureUsage, HapticCapabilities,
    SemanticType, Subsystem, SubsystemId,
};
pub use xrinput_errors::{ConfigError, ProviderError};
pub use xrinput_rules::{Check, Notice, Violation, ViolationKind};
