// crates/scanner/src/share.rs
//! Share payloads and dispatch to the platform share targets

use crate::error::{ShareError, ShareResult};
use async_trait::async_trait;
use bookscan_config::ShareConfig;
use bookscan_core::encode_uri_component;
use std::sync::Arc;

/// Payload handed to a native share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Wraps the reading list text with the configured title and app link
    pub fn new(config: &ShareConfig, list_text: &str) -> Self {
        Self {
            title: config.title.clone(),
            text: format!("{} {}", config.title, list_text),
            url: config.app_url.clone(),
        }
    }
}

/// Builds a `mailto:` link with an encoded recipient, subject and body
///
/// The signature is appended to the body before encoding. The recipient
/// keeps its `@` but anything that could start a new header is escaped.
pub fn mailto_href(recipient: &str, subject: &str, body: &str, signature: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_uri_component(recipient).replace("%40", "@"),
        encode_uri_component(subject),
        encode_uri_component(&format!("{}{}", body, signature))
    )
}

/// Native share sheet (mobile platforms)
#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, payload: &SharePayload) -> ShareResult<()>;
}

/// Email composer used where no share sheet exists
#[async_trait]
pub trait MailComposer: Send + Sync {
    /// Asks the user who to send the list to; `None` when dismissed
    async fn prompt_recipient(&self) -> Option<String>;

    /// Opens the composer with a pre-filled `mailto:` link
    async fn open(&self, href: &str) -> ShareResult<()>;
}

/// Routes a reading list to the share sheet when the platform has one,
/// otherwise to the mail composer
#[derive(Clone)]
pub struct ShareDispatcher {
    sheet: Option<Arc<dyn ShareSheet>>,
    mail: Option<Arc<dyn MailComposer>>,
    config: ShareConfig,
}

impl ShareDispatcher {
    pub fn new(config: ShareConfig) -> Self {
        Self {
            sheet: None,
            mail: None,
            config,
        }
    }

    pub fn with_share_sheet(mut self, sheet: Arc<dyn ShareSheet>) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_mail_composer(mut self, mail: Arc<dyn MailComposer>) -> Self {
        self.mail = Some(mail);
        self
    }

    /// Returns true if any share target is available
    pub fn is_available(&self) -> bool {
        self.sheet.is_some() || self.mail.is_some()
    }

    /// Shares the reading list text
    pub async fn dispatch(&self, list_text: &str) -> ShareResult<()> {
        if let Some(sheet) = &self.sheet {
            let payload = SharePayload::new(&self.config, list_text);
            return sheet.share(&payload).await;
        }

        let mail = self.mail.as_ref().ok_or(ShareError::Unavailable)?;

        let recipient = mail
            .prompt_recipient()
            .await
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or(ShareError::Cancelled)?;

        let href = mailto_href(
            &recipient,
            &self.config.title,
            list_text,
            &self.config.signature,
        );
        mail.open(&href).await
    }
}
