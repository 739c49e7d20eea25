//! Core domain model for BookScan
//!
//! Book records, the reading list they accumulate into, the status shown
//! to the user, and the text rendering shared by every front end.

pub mod error;
pub mod format;
pub mod types;

pub use error::{AppError, Result};
pub use format::{encode_uri_component, render_byline, render_share_text};
pub use types::{Author, BookCollection, BookRecord, Isbn, ScanStatus};
