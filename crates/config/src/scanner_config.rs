//! Scanner configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scan loop timing and camera preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScannerConfig {
    /// How long a status message stays on screen before clearing (ms)
    pub status_clear_delay_ms: u64,

    /// Delay the decoder waits between decode attempts (ms)
    pub decode_timeout_ms: u64,

    /// Longest a lookup may run before it is reported as failed (ms)
    pub lookup_deadline_ms: u64,

    /// Camera device id to use instead of the automatic choice
    pub preferred_device: Option<String>,
}

impl ScannerConfig {
    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_delay_ms)
    }

    pub fn decode_timeout(&self) -> Duration {
        Duration::from_millis(self.decode_timeout_ms)
    }

    pub fn lookup_deadline(&self) -> Duration {
        Duration::from_millis(self.lookup_deadline_ms)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            status_clear_delay_ms: 2500,
            decode_timeout_ms: 1500,
            lookup_deadline_ms: 15_000,
            preferred_device: None,
        }
    }
}

impl ConfigSection for ScannerConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::in_range(
                self.status_clear_delay_ms,
                500..=10_000,
                "scanner.status_clear_delay_ms",
            ),
            Validator::in_range(
                self.decode_timeout_ms,
                100..=10_000,
                "scanner.decode_timeout_ms",
            ),
            Validator::in_range(
                self.lookup_deadline_ms,
                1_000..=120_000,
                "scanner.lookup_deadline_ms",
            ),
        ];

        if let Some(device) = &self.preferred_device {
            results.push(Validator::not_blank(device, "scanner.preferred_device"));
        }

        Validator::collect(results)
    }

    fn merge(&mut self, other: Self) {
        self.status_clear_delay_ms = other.status_clear_delay_ms;
        self.decode_timeout_ms = other.decode_timeout_ms;
        self.lookup_deadline_ms = other.lookup_deadline_ms;
        if other.preferred_device.is_some() {
            self.preferred_device = other.preferred_device;
        }
    }

    fn section_name(&self) -> &'static str {
        "scanner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_duration_accessors() {
        let config = ScannerConfig::default();
        assert_eq!(config.status_clear_delay(), Duration::from_millis(2500));
        assert_eq!(config.decode_timeout(), Duration::from_millis(1500));
        assert_eq!(config.lookup_deadline(), Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_clear_delay() {
        let mut config = ScannerConfig::default();
        config.status_clear_delay_ms = 0;
        assert!(config.validate().is_err());

        config.status_clear_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lookup_deadline_bounds() {
        let config = ScannerConfig {
            lookup_deadline_ms: 10,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scanner.lookup_deadline_ms");
    }

    #[test]
    fn test_blank_preferred_device() {
        let config = ScannerConfig {
            preferred_device: Some("  ".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors[0].field, "scanner.preferred_device");
    }

    #[test]
    fn test_merge_keeps_device_when_other_has_none() {
        let mut base = ScannerConfig {
            preferred_device: Some("rear".to_string()),
            ..Default::default()
        };
        let other = ScannerConfig {
            status_clear_delay_ms: 1500,
            ..Default::default()
        };

        base.merge(other);
        assert_eq!(base.status_clear_delay_ms, 1500);
        assert_eq!(base.preferred_device.as_deref(), Some("rear"));
    }
}
