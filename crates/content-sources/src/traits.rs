// FILE: src/traits.rs
// ============================================================================

use crate::LookupResult;
use async_trait::async_trait;
use bookscan_core::{BookRecord, Isbn};

/// A bibliographic data source that resolves ISBNs to book records
///
/// Implementations map one request to one result and never touch shared
/// state. `LookupError::NotFound` is the normal answer for an ISBN the source
/// does not know.
#[async_trait]
pub trait BookLookup: Send + Sync {
    /// Looks up a single ISBN
    async fn lookup(&self, isbn: &Isbn) -> LookupResult<BookRecord>;

    /// Get metadata about the source
    fn metadata(&self) -> SourceMetadata;
}

/// Source metadata
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub requires_auth: bool,
}
