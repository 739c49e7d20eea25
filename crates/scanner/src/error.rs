// crates/scanner/src/error.rs
//! Error types for the scan session and its collaborators

use thiserror::Error;

/// Result type for share operations
pub type ShareResult<T> = Result<T, ShareError>;

/// Result type for decoder operations
pub type DecoderResult<T> = Result<T, DecoderError>;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors reported by the share sheet or mail composer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet or the recipient prompt
    #[error("Share cancelled")]
    Cancelled,

    /// The platform rejected the share
    #[error("Share failed: {0}")]
    Failed(String),

    /// Neither a share sheet nor a mail composer is available
    #[error("No share target available")]
    Unavailable,
}

/// Errors reported by the camera/decoder adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    /// No video input device is present
    #[error("No video input device available")]
    NoDevice,

    /// A frame could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The device could not be opened or was lost
    #[error("Decoder unavailable: {0}")]
    Unavailable(String),
}

/// Errors from driving a scan session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The decoder could not be started
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    /// The session task has stopped
    #[error("Scan session is closed")]
    Closed,

    /// The session task panicked or was aborted
    #[error("Scan session task failed: {0}")]
    Task(String),
}
