//! Device types for XR input conformance checking.
//!
//! This crate provides the read-only data model a conformance pass works
//! over: devices and their roles, the subsystems that enumerate them,
//! the typed feature usages they expose and their haptic capabilities.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device;
pub mod haptics;
pub mod usage;

pub use device::{Device, DeviceCharacteristics, DeviceId, DeviceRole, Subsystem, SubsystemId};
pub use haptics::HapticCapabilities;
pub use usage::{FeatureUsage, SemanticType};

#[cfg(feature = "proptest")]
mod proptest_shrinks {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for SemanticType {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(SemanticType::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for DeviceRole {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(DeviceRole::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for HapticCapabilities {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (
                0u32..4,
                any::<bool>(),
                any::<bool>(),
                0u32..2000,
                0u32..8192,
                0u32..8192,
            )
                .prop_map(
                    |(
                        num_channels,
                        supports_impulse,
                        supports_buffer,
                        buffer_frequency_hz,
                        buffer_optimal_size,
                        buffer_max_size,
                    )| Self {
                        num_channels,
                        supports_impulse,
                        supports_buffer,
                        buffer_frequency_hz,
                        buffer_optimal_size,
                        buffer_max_size,
                    },
                )
                .boxed()
        }
    }
}
