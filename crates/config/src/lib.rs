//! BookScan Configuration System
//!
//! Each concern adds a config section implementing the `ConfigSection` trait.
//! Configuration is held in memory and can be read from or written to TOML
//! text supplied by the host; nothing is persisted by this crate.
//!
//! # Example
//!
//! ```rust
//! use bookscan_config::Config;
//!
//! let config = Config::from_toml_str("[scanner]\nstatus_clear_delay_ms = 1500\n")
//!     .expect("valid config");
//! assert_eq!(config.scanner.status_clear_delay_ms, 1500);
//! ```

mod error;
mod validation;

mod lookup_config;
mod scanner_config;
mod share_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use validation::{ConfigSection, Validator};

pub use lookup_config::{LookupConfig, DEFAULT_LOOKUP_URL};
pub use scanner_config::ScannerConfig;
pub use share_config::ShareConfig;

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Config format version
    pub version: u32,

    /// Scan loop timing and camera preferences
    pub scanner: ScannerConfig,

    /// Bibliographic lookup service
    pub lookup: LookupConfig,

    /// Share sheet and email text
    pub share: ShareConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a config from TOML text
    ///
    /// Missing sections and fields take their default values.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(text)?;
        config
            .validate()
            .map_err(|errors| ConfigError::from_validation(&errors))?;
        Ok(config)
    }

    /// Parses a config, falling back to defaults when it is unusable
    pub fn from_toml_str_or_default(text: &str) -> Self {
        match Self::from_toml_str(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Config error: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Serializes the config to TOML text
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.scanner.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.lookup.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.share.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.scanner.merge(other.scanner);
        self.lookup.merge(other.lookup);
        self.share.merge(other.share);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            scanner: ScannerConfig::default(),
            lookup: LookupConfig::default(),
            share: ShareConfig::default(),
        }
    }
}
