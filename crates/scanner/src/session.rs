// crates/scanner/src/session.rs
//! Async driver for a scan session
//!
//! A single task owns the controller, the decoder and the share dispatcher
//! and reacts to one event at a time: user commands, lookup completions,
//! the status clear timer, and (only while armed) the next decode. Lookups
//! run on their own tasks and report back over a channel, so a Reset can be
//! handled while one is outstanding. A lookup that panics or outlives its
//! deadline still reports back, as a transport failure.

use crate::controller::{ControllerState, Decision, LookupTicket, ScanController};
use crate::decoder::{choose_device, BarcodeDecoder, DecodeEvent, DecoderSettings};
use crate::error::{DecoderError, DecoderResult, SessionError, SessionResult};
use crate::share::ShareDispatcher;
use bookscan_config::ScannerConfig;
use bookscan_content_sources::{BookLookup, LookupError, LookupResult};
use bookscan_core::{BookRecord, Isbn, ScanStatus};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

const COMMAND_BUFFER: usize = 16;

/// User actions accepted by a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Share,
    Shutdown,
}

/// Render inputs for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Books in the order they were added
    pub books: Vec<BookRecord>,
    pub status: ScanStatus,
    pub state: ControllerState,
    /// Code currently being reconciled or displayed
    pub pending: Option<Isbn>,
    /// False while the list is empty
    pub can_share: bool,
}

impl Snapshot {
    fn of(controller: &ScanController) -> Self {
        Self {
            books: controller.books().to_vec(),
            status: controller.status(),
            state: controller.state(),
            pending: controller.pending().cloned(),
            can_share: controller.can_share(),
        }
    }
}

struct Completion {
    ticket: LookupTicket,
    result: LookupResult<BookRecord>,
}

/// Owns the collaborators of one scan session
pub struct ScanSession {
    controller: ScanController,
    decoder: Box<dyn BarcodeDecoder>,
    lookup: Arc<dyn BookLookup>,
    sharer: ShareDispatcher,
    config: ScannerConfig,
    commands: mpsc::Receiver<Command>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    snapshots: watch::Sender<Snapshot>,
    decoder_retry_at: Option<Instant>,
}

impl ScanSession {
    /// Creates a session and the handle used to drive it
    pub fn new(
        config: ScannerConfig,
        decoder: Box<dyn BarcodeDecoder>,
        lookup: Arc<dyn BookLookup>,
        sharer: ShareDispatcher,
    ) -> (Self, SessionHandle) {
        let controller = ScanController::new(config.status_clear_delay());
        let (command_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(Snapshot::of(&controller));

        let session = Self {
            controller,
            decoder,
            lookup,
            sharer,
            config,
            commands,
            completions_tx,
            completions_rx,
            snapshots,
            decoder_retry_at: None,
        };

        let handle = SessionHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task: None,
        };

        (session, handle)
    }

    /// Creates a session and runs it on a new task
    pub fn spawn(
        config: ScannerConfig,
        decoder: Box<dyn BarcodeDecoder>,
        lookup: Arc<dyn BookLookup>,
        sharer: ShareDispatcher,
    ) -> SessionHandle {
        let (session, mut handle) = Self::new(config, decoder, lookup, sharer);
        handle.task = Some(tokio::spawn(session.run()));
        handle
    }

    /// Runs the session until shutdown or until every handle is dropped
    pub async fn run(mut self) -> SessionResult<()> {
        self.start_decoder().await?;
        self.controller.start();
        self.publish();
        log::info!("Scan session started");

        loop {
            let armed = self.controller.is_armed();
            let deadline = self.controller.clear_deadline();

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Reset) => self.controller.reset(),
                    Some(Command::Share) => self.share().await,
                    Some(Command::Shutdown) | None => break,
                },
                Some(done) = self.completions_rx.recv() => {
                    self.controller
                        .on_lookup_complete(&done.ticket, done.result, Instant::now());
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if deadline.is_some() =>
                {
                    self.controller.on_clear_due(Instant::now());
                }
                decoded = next_decode(self.decoder.as_mut(), self.decoder_retry_at), if armed => {
                    self.handle_decode(decoded);
                }
            }

            self.publish();
        }

        self.decoder.stop().await;
        self.controller.stop();
        self.publish();
        log::info!("Scan session stopped");
        Ok(())
    }

    async fn start_decoder(&mut self) -> DecoderResult<()> {
        let devices = self.decoder.list_devices().await?;
        let device = choose_device(&devices, self.config.preferred_device.as_deref())
            .ok_or(DecoderError::NoDevice)?;

        log::info!("Using video device '{}' ({})", device.label, device.id);

        let settings = DecoderSettings {
            device_id: device.id.clone(),
            decode_timeout: self.config.decode_timeout(),
        };
        self.decoder.start(&settings).await
    }

    fn handle_decode(&mut self, decoded: DecoderResult<DecodeEvent>) {
        let event = match decoded {
            Ok(event) => {
                self.decoder_retry_at = None;
                event
            }
            Err(e) => {
                log::warn!("Decoder error: {}", e);
                self.decoder_retry_at = Some(Instant::now() + self.config.decode_timeout());
                return;
            }
        };

        if let Decision::Lookup(ticket) = self.controller.on_decoded(&event, Instant::now()) {
            let lookup = Arc::clone(&self.lookup);
            let completions = self.completions_tx.clone();
            let deadline = self.config.lookup_deadline();

            tokio::spawn(async move {
                let result = guarded_lookup(lookup, ticket.isbn.clone(), deadline).await;
                // The session may already be gone
                let _ = completions.send(Completion { ticket, result });
            });
        }
    }

    async fn share(&mut self) {
        let Some(text) = self.controller.share_text() else {
            log::debug!("Share requested with an empty list");
            return;
        };

        let outcome = self.sharer.dispatch(&text).await;
        self.controller.on_share_outcome(&outcome, Instant::now());
    }

    fn publish(&self) {
        self.snapshots.send_replace(Snapshot::of(&self.controller));
    }
}

/// Runs a lookup on its own task so that a panic or a hang becomes an error
async fn guarded_lookup(
    lookup: Arc<dyn BookLookup>,
    isbn: Isbn,
    deadline: Duration,
) -> LookupResult<BookRecord> {
    let mut task = tokio::spawn(async move { lookup.lookup(&isbn).await });

    match tokio::time::timeout(deadline, &mut task).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(LookupError::Transport(format!("Lookup task failed: {}", e))),
        Err(_) => {
            task.abort();
            Err(LookupError::Transport(format!(
                "Lookup timed out after {}ms",
                deadline.as_millis()
            )))
        }
    }
}

async fn next_decode(
    decoder: &mut dyn BarcodeDecoder,
    retry_at: Option<Instant>,
) -> DecoderResult<DecodeEvent> {
    if let Some(at) = retry_at {
        tokio::time::sleep_until(at).await;
    }
    decoder.decode_once().await
}

/// Handle to a running scan session
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    task: Option<JoinHandle<SessionResult<()>>>,
}

impl SessionHandle {
    /// Empties the reading list
    pub async fn reset(&self) -> SessionResult<()> {
        self.send(Command::Reset).await
    }

    /// Shares the reading list; does nothing while it is empty
    pub async fn share(&self) -> SessionResult<()> {
        self.send(Command::Share).await
    }

    /// Returns the latest snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver that is notified on every change
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Stops the session and waits for it to release the decoder
    pub async fn shutdown(mut self) -> SessionResult<()> {
        // Ignore send errors: the task may already have exited
        let _ = self.commands.send(Command::Shutdown).await;

        match self.task.take() {
            Some(task) => task
                .await
                .map_err(|e| SessionError::Task(e.to_string()))?,
            None => Ok(()),
        }
    }

    async fn send(&self, command: Command) -> SessionResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| SessionError::Closed)
    }
}
