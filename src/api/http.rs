//! Backend HTTP Client
//!
//! reqwest implementation of [`DashboardApi`] for the native front end.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::envelope::{decode, decode_page, decode_search_result};
use super::error::{ApiError, ApiResult};
use super::params::{HistoryQuery, StreamerQuery};
use super::{search_live_path, statistics_path, streamer_path, DashboardApi};
use crate::models::{Health, LiveSearchResult, Page, ScanRecord, Statistics, Streamer};

/// HTTP client for the monitoring backend
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for `base_url` (e.g. "http://localhost:8000")
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and return the body, mapping non-2xx to [`ApiError::Status`]
    async fn get_text(&self, path: &str) -> ApiResult<String> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::body(response).await
    }

    async fn post_text(&self, path: &str) -> ApiResult<String> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        Self::body(response).await
    }

    async fn body(response: reqwest::Response) -> ApiResult<String> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(&self.get_text(path).await?)
    }

    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Page<T>> {
        decode_page(&self.get_text(path).await?)
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpClient {
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
        let body = self.post_text(&search_live_path(query)).await?;
        decode_search_result(&body)
    }

    async fn health(&self) -> ApiResult<Health> {
        let body = self.get_text("/health").await?;
        Ok(serde_json::from_str(&body)?)
    }
}
