//! # Livewatch
//!
//! Dashboard client for a live-stream monitoring backend. The backend scans
//! for live accounts on a schedule and exposes REST endpoints plus a push
//! channel; this crate loads, paginates and renders that data and keeps the
//! push channel alive with bounded exponential backoff.
//!
//! ## Modules
//!
//! - [`api`]: backend endpoints, response envelope and the [`DashboardApi`] seam
//! - [`channel`]: push-channel messages, reconnect policy and (native) socket driver
//! - [`dashboard`]: the controller tying fetches, view state and rendering together
//! - [`render`]: the [`Renderer`] seam, chart view models and (native) terminal output
//! - [`config`], [`logging`] (native): TOML config and tracing setup for the CLI
//!
//! The default `native` feature pulls in tokio, reqwest and tokio-tungstenite.
//! Without it the crate builds for `wasm32` and the browser dashboard supplies
//! its own transport.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use livewatch::api::{push_channel_url, HttpClient};
//! use livewatch::channel::PushChannel;
//! use livewatch::render::terminal::TerminalRenderer;
//! use livewatch::{Dashboard, DashboardSettings};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpClient::new("http://localhost:8000", Duration::from_secs(30))?;
//!     let settings = DashboardSettings::default();
//!     let dashboard = Dashboard::new(api, TerminalRenderer::stdout(), settings);
//!
//!     dashboard.load_initial().await;
//!
//!     let channel = PushChannel::new(
//!         push_channel_url("http://localhost:8000"),
//!         settings.heartbeat_interval,
//!     );
//!     channel.run(&dashboard).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod channel;
#[cfg(feature = "native")]
pub mod config;
pub mod dashboard;
pub mod format;
#[cfg(feature = "native")]
pub mod logging;
pub mod models;
pub mod notify;
pub mod pagination;
pub mod render;

// Re-export top-level types for convenience
pub use api::{ApiError, ApiResult, DashboardApi, LiveFilter, StreamerFilter};

pub use channel::{ConnectionStatus, PushEvent, ReconnectDecision, ReconnectPolicy};

pub use dashboard::{Dashboard, DashboardSettings};

pub use models::{Health, LiveSearchResult, Page, ScanRecord, Statistics, Streamer};

pub use notify::{Toast, ToastLevel};

pub use pagination::Pagination;

pub use render::{Renderer, StatsView};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
