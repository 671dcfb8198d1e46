//! Backend API
//!
//! The dashboard talks to the monitoring backend through [`DashboardApi`].
//! The native build ships a reqwest implementation ([`HttpClient`]); the
//! browser build implements the same trait over `gloo-net`, and tests use
//! in-memory fakes.
//!
//! ## Endpoints
//!
//! - `GET /api/queries`
//! - `GET /api/streamers?limit&offset&query&is_live`
//! - `GET /api/streamers/{username}`
//! - `GET /api/statistics?hours`
//! - `GET /api/scan-history?limit&offset`
//! - `POST /api/search-live?query`
//! - `GET /health`

mod envelope;
mod error;
#[cfg(feature = "native")]
mod http;
mod params;

use async_trait::async_trait;

pub use envelope::{decode, decode_page, decode_search_result, Envelope};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpClient;
pub use params::{HistoryQuery, LiveFilter, StreamerFilter, StreamerQuery};

use crate::models::{Health, LiveSearchResult, Page, ScanRecord, Statistics, Streamer};

/// Read access to the monitoring backend.
///
/// Futures are `!Send`: the dashboard runs on a single thread, and the
/// browser fetch futures cannot cross threads anyway.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Distinct search queries known to the backend
    async fn queries(&self) -> ApiResult<Vec<String>>;

    /// One page of tracked streamers, most recently seen first
    async fn streamers(&self, query: &StreamerQuery) -> ApiResult<Page<Streamer>>;

    /// A single streamer by username
    async fn streamer(&self, username: &str) -> ApiResult<Streamer>;

    /// Aggregate statistics over the last `hours`
    async fn statistics(&self, hours: u32) -> ApiResult<Statistics>;

    /// Scan history, newest first
    async fn scan_history(&self, query: HistoryQuery) -> ApiResult<Page<ScanRecord>>;

    /// Ask the backend to scan for live streamers now
    async fn search_live(&self, query: &str) -> ApiResult<LiveSearchResult>;

    /// Backend health
    async fn health(&self) -> ApiResult<Health>;
}

/// Path of the statistics endpoint for a window of `hours`
pub fn statistics_path(hours: u32) -> String {
    format!("/api/statistics?hours={}", hours)
}

/// Path of a streamer detail endpoint
pub fn streamer_path(username: &str) -> String {
    format!(
        "/api/streamers/{}",
        urlencoding::encode(username.trim_start_matches('@'))
    )
}

/// Path of the live search trigger
pub fn search_live_path(query: &str) -> String {
    format!("/api/search-live?query={}", urlencoding::encode(query))
}

/// Derive the push-channel URL from the HTTP base URL
pub fn push_channel_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let ws = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    };
    format!("{}/ws", ws)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_channel_url() {
        assert_eq!(push_channel_url("http://localhost:8000"), "ws://localhost:8000/ws");
        assert_eq!(push_channel_url("https://monitor.example.com/"), "wss://monitor.example.com/ws");
    }

    #[test]
    fn test_paths() {
        assert_eq!(statistics_path(24), "/api/statistics?hours=24");
        assert_eq!(streamer_path("@dj kim"), "/api/streamers/dj%20kim");
        assert_eq!(search_live_path("lo-fi"), "/api/search-live?query=lo-fi");
    }
}
