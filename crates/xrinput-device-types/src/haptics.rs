//! Haptic capability descriptor.

use serde::{Deserialize, Serialize};

/// Haptic capabilities a device may report.
///
/// Only the buffered-haptics fields carry numeric invariants; impulse
/// support and channel count are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HapticCapabilities {
    #[serde(default)]
    pub num_channels: u32,
    #[serde(default)]
    pub supports_impulse: bool,
    pub supports_buffer: bool,
    #[serde(default)]
    pub buffer_frequency_hz: u32,
    #[serde(default)]
    pub buffer_optimal_size: u32,
    #[serde(default)]
    pub buffer_max_size: u32,
}

impl HapticCapabilities {
    /// Impulse-only haptics, no buffer support.
    pub fn impulse_only(num_channels: u32) -> Self {
        Self {
            num_channels,
            supports_impulse: true,
            ..Self::default()
        }
    }

    /// Buffered haptics with the given rate and sizes.
    pub fn buffered(frequency_hz: u32, optimal_size: u32, max_size: u32) -> Self {
        Self {
            num_channels: 1,
            supports_impulse: true,
            supports_buffer: true,
            buffer_frequency_hz: frequency_hz,
            buffer_optimal_size: optimal_size,
            buffer_max_size: max_size,
        }
    }

    pub fn with_channels(mut self, num_channels: u32) -> Self {
        self.num_channels = num_channels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_only_has_zero_buffer_fields() {
        let caps = HapticCapabilities::impulse_only(2);
        assert!(!caps.supports_buffer);
        assert_eq!(caps.buffer_frequency_hz, 0);
        assert_eq!(caps.buffer_optimal_size, 0);
        assert_eq!(caps.buffer_max_size, 0);
        assert_eq!(caps.num_channels, 2);
    }

    #[test]
    fn test_buffered_builder() {
        let caps = HapticCapabilities::buffered(320, 32, 1024).with_channels(2);
        assert!(caps.supports_buffer);
        assert_eq!(caps.buffer_frequency_hz, 320);
        assert_eq!(caps.buffer_optimal_size, 32);
        assert_eq!(caps.buffer_max_size, 1024);
        assert_eq!(caps.num_channels, 2);
    }
}
