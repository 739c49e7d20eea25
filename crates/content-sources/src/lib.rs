// FILE: crates/content-sources/src/lib.rs
//! Bibliographic data sources for scanned ISBNs

mod openlibrary;
mod traits;

pub use openlibrary::{parse_response, OpenLibrarySource};
pub use traits::{BookLookup, SourceMetadata};

use thiserror::Error;

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors from a book lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The source has no record for this ISBN
    #[error("Not found")]
    NotFound,

    /// The request failed or the response could not be read
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl LookupError {
    /// Returns true if the source answered but had no data
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::NotFound;
        assert!(err.to_string().contains("Not found"));

        let err = LookupError::Transport("HTTP 503".to_string());
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(LookupError::NotFound.is_not_found());
        assert!(!LookupError::Transport("reset".to_string()).is_not_found());
    }

    #[test]
    fn test_sources_exported() {
        let source = OpenLibrarySource::new();
        assert_eq!(source.metadata().name, "Open Library");
    }
}
