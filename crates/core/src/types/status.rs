//! Scan status shown to the user

use serde::{Deserialize, Serialize};

/// The single status message currently on display
///
/// Every variant other than `Idle` is transient and returns to `Idle` once
/// its clear delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Nothing to report, the scanner is waiting for a barcode
    #[default]
    Idle,
    /// A new book was looked up and added to the list
    Scanned,
    /// The scanned book is already in the list
    AlreadyInList,
    /// The bibliographic service has no record for the scanned ISBN
    NotFound,
    /// The lookup request itself failed (network or malformed response)
    LookupFailed,
    /// The list was handed to the share sheet or mail composer
    ShareSucceeded,
    /// Sharing was rejected or cancelled
    ShareFailed,
}

impl ScanStatus {
    /// Returns true for every status that clears itself after a delay
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true for statuses that report a problem
    pub fn is_error(&self) -> bool {
        matches!(self, Self::NotFound | Self::LookupFailed | Self::ShareFailed)
    }

    /// Text displayed to the user for this status
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "Hold up a book's barcode to the camera",
            Self::Scanned => "Scanned!",
            Self::AlreadyInList => "This book is already in your list!",
            Self::NotFound => "Sorry, but we couldn't find this book in our partner databases.",
            Self::LookupFailed => "Sorry, we couldn't reach the book database. Try scanning again.",
            Self::ShareSucceeded => "Share successful!",
            Self::ShareFailed => "Sorry, the share failed. Try again?",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
