//! Bibliographic lookup configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Open Library books endpoint
pub const DEFAULT_LOOKUP_URL: &str = "https://openlibrary.org/api/books";

/// Settings for the book metadata service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// Endpoint queried with `bibkeys=ISBN:{isbn}`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOOKUP_URL.to_string(),
            timeout_secs: 10,
            user_agent: format!("BookScan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ConfigSection for LookupConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect([
            Validator::http_url(&self.base_url, "lookup.base_url"),
            Validator::in_range(self.timeout_secs, 1..=120, "lookup.timeout_secs"),
            Validator::not_blank(&self.user_agent, "lookup.user_agent"),
        ])
    }

    fn merge(&mut self, other: Self) {
        self.base_url = other.base_url;
        self.timeout_secs = other.timeout_secs;
        self.user_agent = other.user_agent;
    }

    fn section_name(&self) -> &'static str {
        "lookup"
    }
}
