// crates/scanner/src/controller.rs
//! Scan reconciliation state machine
//!
//! The controller owns the reading list and the status on display. It
//! decides for each decoded code whether to look it up, report it as a
//! duplicate, or ignore it, and it applies lookup results and share
//! outcomes as they arrive.
//!
//! ```text
//!            start()
//!   Idle ───────────────► AwaitingDecode ◄───────────────────────┐
//!                              │                                 │
//!                  decode      │   already listed                │ clear timer
//!              ┌───────────────┴──────────────┐                  │ or reset()
//!              ▼                              ▼                  │
//!     Reconciling(code) ── lookup done ──► Displaying(status) ───┘
//! ```
//!
//! The controller does no I/O and never reads the clock; callers pass
//! `now` in. Every lookup is issued with a `LookupTicket` carrying the
//! current generation. `reset()` bumps the generation, so a lookup that
//! completes after a reset is recognised as stale and dropped.

use crate::decoder::DecodeEvent;
use crate::error::ShareResult;
use bookscan_content_sources::{LookupError, LookupResult};
use bookscan_core::{render_share_text, BookCollection, BookRecord, Isbn, ScanStatus};
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Observable state of the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ControllerState {
    /// Scanner not started
    Idle,
    /// Armed and waiting for the decoder
    AwaitingDecode,
    /// A lookup for this code is in flight
    Reconciling(Isbn),
    /// A status is on display until its clear timer fires
    Displaying(ScanStatus),
}

/// Identifies one lookup and the generation it was issued in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTicket {
    pub isbn: Isbn,
    pub generation: u64,
}

/// What the caller must do after a decode event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Issue a lookup and report back with the ticket
    Lookup(LookupTicket),
    /// The code is already listed; no lookup
    Duplicate(Isbn),
    /// The event was not accepted (not armed, or unusable text)
    Ignored,
}

/// Scan-to-list reconciliation controller
#[derive(Debug)]
pub struct ScanController {
    books: BookCollection,
    status: ScanStatus,
    pending: Option<Isbn>,
    in_flight: bool,
    active: bool,
    clear_at: Option<Instant>,
    generation: u64,
    clear_delay: Duration,
}

impl ScanController {
    /// Creates a controller whose statuses clear after `clear_delay`
    pub fn new(clear_delay: Duration) -> Self {
        Self {
            books: BookCollection::new(),
            status: ScanStatus::Idle,
            pending: None,
            in_flight: false,
            active: false,
            clear_at: None,
            generation: 0,
            clear_delay,
        }
    }

    /// Marks the scanner as running
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Marks the scanner as stopped
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn state(&self) -> ControllerState {
        if !self.active {
            return ControllerState::Idle;
        }

        match (&self.pending, self.in_flight) {
            (Some(code), true) => ControllerState::Reconciling(code.clone()),
            _ if self.status.is_terminal() || self.pending.is_some() => {
                ControllerState::Displaying(self.status)
            }
            _ => ControllerState::AwaitingDecode,
        }
    }

    /// Returns true when a decode event would be accepted
    pub fn is_armed(&self) -> bool {
        self.active && self.pending.is_none()
    }

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn pending(&self) -> Option<&Isbn> {
        self.pending.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// When the current status is due to clear, if one is on display
    pub fn clear_deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// Reconciles a decoded code against the list
    pub fn on_decoded(&mut self, event: &DecodeEvent, now: Instant) -> Decision {
        if !self.is_armed() {
            log::debug!("Ignoring decode of '{}' while not armed", event.text);
            return Decision::Ignored;
        }

        let isbn = match Isbn::parse(&event.text) {
            Ok(isbn) => isbn,
            Err(e) => {
                log::warn!("Ignoring decoded barcode: {}", e);
                return Decision::Ignored;
            }
        };

        self.pending = Some(isbn.clone());

        if self.books.contains(&isbn) {
            log::info!("{} is already in the list", isbn);
            self.set_status(ScanStatus::AlreadyInList, now);
            return Decision::Duplicate(isbn);
        }

        self.in_flight = true;
        Decision::Lookup(LookupTicket {
            isbn,
            generation: self.generation,
        })
    }

    /// Applies the result of a lookup
    ///
    /// Returns false when the ticket is stale and the result was dropped.
    pub fn on_lookup_complete(
        &mut self,
        ticket: &LookupTicket,
        result: LookupResult<BookRecord>,
        now: Instant,
    ) -> bool {
        if ticket.generation != self.generation
            || !self.in_flight
            || self.pending.as_ref() != Some(&ticket.isbn)
        {
            log::debug!(
                "Dropping stale lookup for {} (generation {}, current {})",
                ticket.isbn,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.in_flight = false;

        let status = match result {
            Ok(record) => {
                let title = record.title().to_string();
                if self.books.insert_if_absent(record) {
                    log::info!("Added '{}' ({})", title, ticket.isbn);
                    ScanStatus::Scanned
                } else {
                    ScanStatus::AlreadyInList
                }
            }
            Err(LookupError::NotFound) => {
                log::info!("No record found for {}", ticket.isbn);
                ScanStatus::NotFound
            }
            Err(LookupError::Transport(reason)) => {
                log::warn!("Lookup for {} failed: {}", ticket.isbn, reason);
                ScanStatus::LookupFailed
            }
        };

        self.set_status(status, now);
        true
    }

    /// Clears the status once its deadline has passed
    ///
    /// Returns true if the status was cleared.
    pub fn on_clear_due(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(at) if now >= at => {
                self.status = ScanStatus::Idle;
                self.clear_at = None;
                if !self.in_flight {
                    self.pending = None;
                }
                true
            }
            _ => false,
        }
    }

    /// Empties the list and returns to waiting for a decode immediately
    pub fn reset(&mut self) {
        self.books.clear();
        self.status = ScanStatus::Idle;
        self.pending = None;
        self.in_flight = false;
        self.clear_at = None;
        self.generation = self.generation.wrapping_add(1);
        log::info!("Reading list reset");
    }

    /// Returns true when there is something to share
    pub fn can_share(&self) -> bool {
        !self.books.is_empty()
    }

    /// Builds the reading list text, or `None` when the list is empty
    pub fn share_text(&self) -> Option<String> {
        render_share_text(&self.books)
    }

    /// Records the outcome of a share attempt
    pub fn on_share_outcome(&mut self, outcome: &ShareResult<()>, now: Instant) {
        let status = match outcome {
            Ok(()) => {
                log::info!("Shared {} book(s)", self.books.len());
                ScanStatus::ShareSucceeded
            }
            Err(e) => {
                log::warn!("Share failed: {}", e);
                ScanStatus::ShareFailed
            }
        };
        self.set_status(status, now);
    }

    fn set_status(&mut self, status: ScanStatus, now: Instant) {
        self.status = status;
        self.clear_at = Some(now + self.clear_delay);
    }
}
