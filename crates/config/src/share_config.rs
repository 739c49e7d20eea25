//! Share configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Text wrapped around a shared reading list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    /// Share sheet title and email subject
    pub title: String,

    /// Link to the app, attached to native shares
    pub app_url: String,

    /// Footer appended to email bodies
    pub signature: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        let app_url = "https://zp-book-scan.netlify.com".to_string();
        Self {
            title: "Here's what I'm reading that I think you'll like!".to_string(),
            signature: format!("\n\n\n\n\n\n\n\n--sent using {}--", app_url),
            app_url,
        }
    }
}

impl ConfigSection for ShareConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect([
            Validator::not_blank(&self.title, "share.title"),
            Validator::http_url(&self.app_url, "share.app_url"),
        ])
    }

    fn merge(&mut self, other: Self) {
        self.title = other.title;
        self.app_url = other.app_url;
        self.signature = other.signature;
    }

    fn section_name(&self) -> &'static str {
        "share"
    }
}
