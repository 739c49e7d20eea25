//! Domain types for BookScan
//!
//! - `book`: ISBN keys, authors and book records
//! - `collection`: the accumulated reading list
//! - `status`: the transient status shown to the user

mod book;
mod collection;
mod status;

pub use book::{Author, BookRecord, Isbn};
pub use collection::BookCollection;
pub use status::ScanStatus;
