// crates/scanner/src/lib.rs
//! ISBN scan reconciliation
//!
//! This crate turns barcode decodes into a deduplicated reading list:
//! - Camera/decoder adapter boundary and device selection
//! - Reconciliation controller (duplicate check, lookup, transient status)
//! - Sharing through a native share sheet or an email fallback
//! - An async session that drives all of the above
//!
//! # Example
//!
//! ```rust
//! use bookscan_scanner::{ScanController, Decision, DecodeEvent};
//! use std::time::Duration;
//! use tokio::time::Instant;
//!
//! let mut controller = ScanController::new(Duration::from_millis(2500));
//! controller.start();
//!
//! let decision = controller.on_decoded(&DecodeEvent::new("9780140449136"), Instant::now());
//! assert!(matches!(decision, Decision::Lookup(_)));
//! ```

mod controller;
mod decoder;
mod error;
mod session;
mod share;

pub use controller::{ControllerState, Decision, LookupTicket, ScanController};
pub use decoder::{
    choose_device, select_default_device, BarcodeDecoder, DecodeEvent, DecoderSettings,
    VideoDevice,
};
pub use error::{
    DecoderError, DecoderResult, SessionError, SessionResult, ShareError, ShareResult,
};
pub use session::{Command, ScanSession, SessionHandle, Snapshot};
pub use share::{mailto_href, MailComposer, ShareDispatcher, SharePayload, ShareSheet};
