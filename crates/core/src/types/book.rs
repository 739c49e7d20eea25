//! Book and author domain models

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// ISBN key for a scanned book
///
/// Holds the decoded barcode text with surrounding whitespace removed. The
/// text is otherwise kept as decoded, since the bibliographic service is
/// keyed by exactly what the barcode encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Creates an ISBN from decoded barcode text
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidIsbn {
                value: text.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ISBN text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bib-key used by the bibliographic service (`ISBN:{isbn}`)
    pub fn bib_key(&self) -> String {
        format!("ISBN:{}", self.0)
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Isbn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

/// A book author as reported by the bibliographic service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Author {
    /// Creates an author without a reference URL
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Sets the author's reference URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Bibliographic data for one scanned book
///
/// Created when a lookup succeeds and never modified afterwards. Authors
/// keep the order the service returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    isbn: Isbn,
    title: String,
    authors: Vec<Author>,
}

impl BookRecord {
    /// Creates a new book record
    pub fn new(isbn: Isbn, title: impl Into<String>, authors: Vec<Author>) -> Self {
        Self {
            isbn,
            title: title.into(),
            authors,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Returns the human-readable author list
    pub fn byline(&self) -> String {
        crate::format::render_byline(&self.authors)
    }
}
