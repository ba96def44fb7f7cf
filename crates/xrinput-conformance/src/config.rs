//! Optional expected-configuration descriptor.
//!
//! When no descriptor exists every check falls back to treating the
//! observed devices as the expectation.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use xrinput_errors::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Frames to let the provider settle before sampling.
    #[serde(default, alias = "FramesToDelayForTests")]
    pub settle_delay_ticks: u32,
    /// Names of the devices the provider is expected to report. Absent
    /// means no expectation, not an expectation of zero devices.
    #[serde(default, alias = "DeviceNames", skip_serializing_if = "Option::is_none")]
    pub expected_device_names: Option<Vec<String>>,
}

impl ConformanceConfig {
    pub fn new(settle_delay_ticks: u32, expected_device_names: Vec<String>) -> Self {
        Self {
            settle_delay_ticks,
            expected_device_names: Some(expected_device_names),
        }
    }

    /// A descriptor that only asks for a settle delay.
    pub fn settle_only(settle_delay_ticks: u32) -> Self {
        Self {
            settle_delay_ticks,
            expected_device_names: None,
        }
    }

    pub fn expected_device_names(&self) -> Option<&[String]> {
        self.expected_device_names.as_deref()
    }

    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::parse(origin, err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Device names are matched exactly, so a blank entry can never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .expected_device_names()
            .unwrap_or_default()
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "expected_device_names",
                format!("entry {index} is blank"),
            ));
        }
        Ok(())
    }

    /// Load a descriptor. A missing file is `Ok(None)`.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %shown,
                    "No configuration descriptor found; expectation checks are skipped"
                );
                return Ok(None);
            }
            Err(err) => return Err(ConfigError::io(shown, err)),
        };
        let config = Self::from_json_str(&json, &shown)?;
        info!(
            path = %shown,
            settle_delay_ticks = config.settle_delay_ticks,
            expected_devices = ?config.expected_device_names().map(<[String]>::len),
            "Loaded configuration descriptor"
        );
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_descriptor_keys_accepted() -> TestResult {
        let config = ConformanceConfig::from_json_str(
            r#"{ "FramesToDelayForTests": 30, "DeviceNames": ["Mock HMD", "Mock Controller"] }"#,
            "inline",
        )?;
        assert_eq!(config.settle_delay_ticks, 30);
        assert_eq!(config.expected_device_names().map(<[String]>::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_snake_case_keys_and_defaults() -> TestResult {
        let config = ConformanceConfig::from_json_str(
            r#"{ "expected_device_names": ["Mock HMD"], "comment": "ignored" }"#,
            "inline",
        )?;
        assert_eq!(config, ConformanceConfig::new(0, vec!["Mock HMD".into()]));
        Ok(())
    }

    #[test]
    fn test_settle_only_descriptor_has_no_expectation() -> TestResult {
        let config = ConformanceConfig::from_json_str(r#"{ "settle_delay_ticks": 12 }"#, "inline")?;
        assert_eq!(config, ConformanceConfig::settle_only(12));
        assert!(config.expected_device_names().is_none());
        Ok(())
    }

    #[test]
    fn test_explicit_empty_list_is_an_expectation() -> TestResult {
        let config = ConformanceConfig::from_json_str(r#"{ "DeviceNames": [] }"#, "inline")?;
        assert_eq!(config.expected_device_names(), Some(&[][..]));
        Ok(())
    }

    #[test]
    fn test_blank_expected_name_is_invalid() {
        let result =
            ConformanceConfig::from_json_str(r#"{ "DeviceNames": ["Mock HMD", " "] }"#, "x.json");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { ref field, ref reason })
                if field == "expected_device_names" && reason == "entry 1 is blank"
        ));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let result = ConformanceConfig::from_json_str(r#"{ "DeviceNames": "Mock HMD" }"#, "x.json");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
