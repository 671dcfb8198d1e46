//! Push-Channel Message Types
//!
//! Frames exchanged over `/ws`. The server sends JSON
//! `{"type": ..., "timestamp": ..., "data": ...}`; the client only ever sends
//! the literal text frame [`HEARTBEAT`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Heartbeat frame sent by the client while the channel is open
pub const HEARTBEAT: &str = "ping";

/// Events received from the server
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// A backend scan cycle finished
    ScanComplete {
        data: Value,
    },
    /// The backend started tracking a new account
    NewStreamer {
        username: String,
        data: Value,
    },
    /// Heartbeat acknowledgement
    Pong,
    /// Any type this client does not know; ignored
    Unknown {
        kind: String,
    },
}

/// Wire shape of a server frame
#[derive(Debug, Deserialize)]
struct Frame {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl PushEvent {
    /// Parse a text frame
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let frame: Frame =
            serde_json::from_str(text).map_err(|e| ProtocolError::Malformed(e.to_string()))?;

        Ok(match frame.kind.as_str() {
            "scan_complete" => PushEvent::ScanComplete { data: frame.data },
            "new_streamer" => PushEvent::NewStreamer {
                username: frame
                    .data
                    .get("username")
                    .and_then(|u| u.as_str())
                    .unwrap_or_default()
                    .to_string(),
                data: frame.data,
            },
            "pong" => PushEvent::Pong,
            _ => PushEvent::Unknown { kind: frame.kind },
        })
    }

    /// Wire name of the event type
    pub fn kind(&self) -> &str {
        match self {
            PushEvent::ScanComplete { .. } => "scan_complete",
            PushEvent::NewStreamer { .. } => "new_streamer",
            PushEvent::Pong => "pong",
            PushEvent::Unknown { kind } => kind,
        }
    }
}

/// Push-channel frame errors
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    #[error("Malformed push frame: {0}")]
    Malformed(String),
}
