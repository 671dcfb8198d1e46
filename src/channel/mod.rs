//! Push Channel
//!
//! Live updates from the backend over a WebSocket at `/ws`.
//!
//! ## Architecture
//!
//! - **Messages**: server frame parsing and the client heartbeat
//! - **Backoff**: bounded exponential reconnect policy and the
//!   connected/disconnected/failed state machine
//! - **Socket** (native): tokio-tungstenite driver feeding a
//!   [`Dashboard`](crate::Dashboard)
//!
//! The browser dashboard drives the same state machine from
//! `web_sys::WebSocket` callbacks.

mod backoff;
mod messages;
#[cfg(feature = "native")]
mod socket;

pub use backoff::{
    Backoff, ChannelSupervisor, ConnectionStatus, ReconnectDecision, ReconnectPolicy,
};
pub use messages::{ProtocolError, PushEvent, HEARTBEAT};
#[cfg(feature = "native")]
pub use socket::{ChannelError, PushChannel};
