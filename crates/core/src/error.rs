//! Error types for the BookScan domain model
//!
//! Lookup, share and decoder failures live in the crates that own those
//! collaborators. This module only covers faults raised while building the
//! domain values themselves.

use thiserror::Error;

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the domain model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The decoded barcode text cannot be used as an ISBN key
    #[error("Invalid ISBN: '{value}'")]
    InvalidIsbn { value: String },
}

impl AppError {
    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidIsbn { .. } => {
                "That barcode doesn't look like a book. Try scanning the ISBN barcode.".to_string()
            }
        }
    }
}
