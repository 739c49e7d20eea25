// crates/scanner/src/decoder.rs
//! Camera/decoder adapter boundary
//!
//! The barcode decoder is an external collaborator. A session owns exactly
//! one decoder for its whole life, starts it once, asks it for one decode at
//! a time while the controller is armed, and stops it on shutdown.

use crate::error::DecoderResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single successful barcode read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeEvent {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl DecodeEvent {
    /// Creates an event stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A video input device reported by the decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDevice {
    pub id: String,
    pub label: String,
}

impl VideoDevice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Settings handed to the decoder when it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderSettings {
    /// Device to read from
    pub device_id: String,
    /// Delay between decode attempts
    pub decode_timeout: Duration,
}

/// Barcode decoder bound to a video device
#[async_trait]
pub trait BarcodeDecoder: Send {
    /// Lists the available video input devices
    async fn list_devices(&mut self) -> DecoderResult<Vec<VideoDevice>>;

    /// Opens the device and prepares for decoding
    async fn start(&mut self, settings: &DecoderSettings) -> DecoderResult<()>;

    /// Waits for the next successful decode
    ///
    /// Must be cancel-safe: the session drops this future whenever another
    /// event wins the race and calls it again once re-armed.
    async fn decode_once(&mut self) -> DecoderResult<DecodeEvent>;

    /// Releases the device
    async fn stop(&mut self);
}

/// Picks the device to use when the user has not chosen one
///
/// With two devices the second is used, which on phones is the rear camera.
/// Otherwise the first device wins.
pub fn select_default_device(devices: &[VideoDevice]) -> Option<&VideoDevice> {
    match devices {
        [] => None,
        [_, rear] => Some(rear),
        [first, ..] => Some(first),
    }
}

/// Picks the preferred device if present, else the default choice
pub fn choose_device<'a>(
    devices: &'a [VideoDevice],
    preferred: Option<&str>,
) -> Option<&'a VideoDevice> {
    preferred
        .and_then(|id| devices.iter().find(|d| d.id == id))
        .or_else(|| select_default_device(devices))
}
