// FILE: crates/content-sources/src/openlibrary.rs

use crate::{BookLookup, LookupError, LookupResult, SourceMetadata};
use async_trait::async_trait;
use bookscan_config::LookupConfig;
use bookscan_core::{encode_uri_component, Author, BookRecord, Isbn};
use serde::Deserialize;
use std::collections::HashMap;

/// Open Library books API client
///
/// Queries `{base_url}?bibkeys=ISBN:{isbn}&format=json&jscmd=data`. The
/// service answers with an object keyed by bib-key, which is empty when the
/// ISBN is unknown.
pub struct OpenLibrarySource {
    base_url: String,
    client: Option<reqwest::Client>,
}

impl OpenLibrarySource {
    /// Create a new Open Library source with default settings
    pub fn new() -> Self {
        Self::with_config(&LookupConfig::default())
    }

    /// Create a source from lookup settings
    pub fn with_config(config: &LookupConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| log::error!("Failed to build HTTP client: {}", e))
            .ok();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Builds the request URL for an ISBN
    pub fn request_url(&self, isbn: &Isbn) -> String {
        format!(
            "{}?bibkeys=ISBN:{}&format=json&jscmd=data",
            self.base_url,
            encode_uri_component(isbn.as_str())
        )
    }
}

impl Default for OpenLibrarySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookLookup for OpenLibrarySource {
    async fn lookup(&self, isbn: &Isbn) -> LookupResult<BookRecord> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| LookupError::Transport("HTTP client not available".to_string()))?;

        let url = self.request_url(isbn);
        log::debug!("Looking up {} at {}", isbn, url);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LookupError::Transport(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("Failed to read response: {}", e)))?;

        parse_response(isbn, &body)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Open Library".to_string(),
            description: "Open, editable library catalog from the Internet Archive".to_string(),
            base_url: self.base_url.clone(),
            requires_auth: false,
        }
    }
}

/// Maps an Open Library `jscmd=data` response body to a book record
///
/// An empty object means the ISBN is unknown. Otherwise the entry under
/// `ISBN:{isbn}` is used, or the only entry present if the service keyed it
/// differently.
pub fn parse_response(isbn: &Isbn, body: &str) -> LookupResult<BookRecord> {
    let mut entries: HashMap<String, OpenLibraryBook> = serde_json::from_str(body)
        .map_err(|e| LookupError::Transport(format!("JSON parse error: {}", e)))?;

    let book = entries
        .remove(&isbn.bib_key())
        .or_else(|| entries.into_values().next())
        .ok_or(LookupError::NotFound)?;

    Ok(BookRecord::new(
        isbn.clone(),
        book.title,
        book.authors.into_iter().map(Author::from).collect(),
    ))
}

/// One entry of the `jscmd=data` response
#[derive(Debug, Clone, Deserialize)]
struct OpenLibraryBook {
    title: String,

    #[serde(default)]
    authors: Vec<OpenLibraryAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenLibraryAuthor {
    name: String,

    #[serde(default)]
    url: Option<String>,
}

impl From<OpenLibraryAuthor> for Author {
    fn from(author: OpenLibraryAuthor) -> Self {
        Author {
            name: author.name,
            url: author.url,
        }
    }
}
