//! HTTP API Client
//!
//! gloo-net implementation of the dashboard's backend seam.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use livewatch::api::{
    decode, decode_page, decode_search_result, search_live_path, statistics_path,
    streamer_path, ApiError, ApiResult, DashboardApi, HistoryQuery, StreamerQuery,
};
use livewatch::models::{Health, LiveSearchResult, Page, ScanRecord, Statistics, Streamer};

/// Fallback when the page origin is unavailable
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key overriding the backend URL
const API_URL_KEY: &str = "livewatch_api_url";

/// Backend base URL: local storage override, else the page's own origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| {
            let stored = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
                .filter(|url| !url.trim().is_empty());
            stored.or_else(|| window.location().origin().ok())
        })
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Backend client over the browser fetch API
#[derive(Clone)]
pub struct GlooApi {
    base_url: String,
}

impl GlooApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_text(&self, path: &str) -> ApiResult<String> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        body(response).await
    }

    async fn post_text(&self, path: &str) -> ApiResult<String> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        body(response).await
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(&self.get_text(path).await?)
    }

    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Page<T>> {
        decode_page(&self.get_text(path).await?)
    }
}

async fn body(response: Response) -> ApiResult<String> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if response.ok() {
        Ok(text)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            message: text,
        })
    }
}

#[async_trait(?Send)]
impl DashboardApi for GlooApi {
    async fn queries(&self) -> ApiResult<Vec<String>> {
        self.get_data("/api/queries").await
    }

    async fn streamers(&self, query: &StreamerQuery) -> ApiResult<Page<Streamer>> {
        self.get_page(&format!("/api/streamers?{}", query.to_query_string()))
            .await
    }

    async fn streamer(&self, username: &str) -> ApiResult<Streamer> {
        self.get_data(&streamer_path(username)).await
    }

    async fn statistics(&self, hours: u32) -> ApiResult<Statistics> {
        self.get_data(&statistics_path(hours)).await
    }

    async fn scan_history(&self, query: HistoryQuery) -> ApiResult<Page<ScanRecord>> {
        self.get_page(&format!("/api/scan-history?{}", query.to_query_string()))
            .await
    }

    async fn search_live(&self, query: &str) -> ApiResult<LiveSearchResult> {
        decode_search_result(&self.post_text(&search_live_path(query)).await?)
    }

    async fn health(&self) -> ApiResult<Health> {
        let text = self.get_text("/health").await?;
        Ok(serde_json::from_str(&text)?)
    }
}
