//! Numeric invariants of a haptic capability descriptor.

use xrinput_device_types::{Device, HapticCapabilities};

use crate::{Violation, ViolationKind};

/// Platform ceiling for haptic buffer sizes.
pub const MAX_HAPTIC_BUFFER: u32 = 4096;

/// Limits the haptic validator checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticLimits {
    pub buffer_ceiling: u32,
}

impl Default for HapticLimits {
    fn default() -> Self {
        Self {
            buffer_ceiling: MAX_HAPTIC_BUFFER,
        }
    }
}

impl HapticLimits {
    pub fn with_ceiling(buffer_ceiling: u32) -> Self {
        Self { buffer_ceiling }
    }

    /// Check a device's capabilities. Absent capabilities are skipped.
    pub fn check(&self, device: &Device, caps: Option<&HapticCapabilities>) -> Vec<Violation> {
        let Some(caps) = caps else {
            return Vec::new();
        };
        let kinds = if caps.supports_buffer {
            self.buffered_violations(caps)
        } else {
            unbuffered_violations(caps)
        };
        kinds
            .into_iter()
            .map(|kind| Violation::for_device(device, kind))
            .collect()
    }

    fn buffered_violations(&self, caps: &HapticCapabilities) -> Vec<ViolationKind> {
        let mut kinds = Vec::new();
        if caps.buffer_frequency_hz == 0 {
            kinds.push(ViolationKind::HapticFrequencyZero);
        }
        if caps.buffer_optimal_size == 0 {
            kinds.push(ViolationKind::HapticOptimalSizeZero);
        }
        if caps.buffer_optimal_size > caps.buffer_max_size {
            kinds.push(ViolationKind::HapticOptimalExceedsMax {
                optimal: caps.buffer_optimal_size,
                max: caps.buffer_max_size,
            });
        }
        for (field, value) in [
            ("bufferOptimalSize", caps.buffer_optimal_size),
            ("bufferMaxSize", caps.buffer_max_size),
        ] {
            if value > self.buffer_ceiling {
                kinds.push(ViolationKind::HapticBufferExceedsCeiling {
                    field: field.to_string(),
                    value,
                    ceiling: self.buffer_ceiling,
                });
            }
        }
        kinds
    }
}

fn unbuffered_violations(caps: &HapticCapabilities) -> Vec<ViolationKind> {
    [
        ("bufferFrequencyHz", caps.buffer_frequency_hz),
        ("bufferOptimalSize", caps.buffer_optimal_size),
        ("bufferMaxSize", caps.buffer_max_size),
    ]
    .into_iter()
    .filter(|(_, value)| *value != 0)
    .map(|(field, value)| ViolationKind::HapticFieldWithoutBuffer {
        field: field.to_string(),
        value,
    })
    .collect()
}
