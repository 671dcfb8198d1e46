//! Response Envelope
//!
//! Every backend endpoint wraps its payload as
//! `{"success": bool, "data": ..., "total": n, "error": "..."}`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use crate::models::{LiveSearchResult, Page};

/// Raw envelope as served
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Backend`]
    pub fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Backend(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("missing `data` field".to_string()))
    }
}

impl<T> Envelope<Vec<T>> {
    /// Unwrap a paginated listing. A missing `total` falls back to the row count.
    pub fn into_page(self) -> ApiResult<Page<T>> {
        let limit = self.limit;
        let offset = self.offset.unwrap_or(0);
        let total = self.total;
        let items = self.into_data()?;
        let total = total.unwrap_or(offset + items.len() as u64);
        Ok(Page {
            limit: limit.unwrap_or(items.len() as u64),
            offset,
            total,
            items,
        })
    }
}

/// Decode a response body into its payload
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str::<Envelope<T>>(body)?.into_data()
}

/// Decode a paginated response body
pub fn decode_page<T: DeserializeOwned>(body: &str) -> ApiResult<Page<T>> {
    serde_json::from_str::<Envelope<Vec<T>>>(body)?.into_page()
}

/// The live search answer carries its fields at the top level, not under `data`
pub fn decode_search_result(body: &str) -> ApiResult<LiveSearchResult> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("success").and_then(|s| s.as_bool()) != Some(true) {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        return Err(ApiError::Backend(message));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScanRecord, Streamer};

    #[test]
    fn test_decode_success() {
        let queries: Vec<String> =
            decode(r#"{"success": true, "data": ["gaming", "music"]}"#).unwrap();
        assert_eq!(queries, vec!["gaming", "music"]);
    }

    #[test]
    fn test_decode_backend_failure() {
        let err = decode::<Vec<String>>(r#"{"success": false, "error": "database locked"}"#)
            .unwrap_err();
        match err {
            ApiError::Backend(msg) => assert_eq!(msg, "database locked"),
            other => panic!("Expected Backend, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode::<Vec<String>>(r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_not_json() {
        let err = decode::<Vec<String>>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_page() {
        let body = r#"{
            "success": true,
            "total": 41,
            "limit": 20,
            "offset": 20,
            "data": [{"username": "a"}, {"username": "b"}]
        }"#;
        let page: Page<Streamer> = decode_page(body).unwrap();
        assert_eq!(page.total, 41);
        assert_eq!(page.offset, 20);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].username, "b");
    }

    #[test]
    fn test_decode_page_with_null_cells() {
        let body = r#"{
            "success": true,
            "total": 2,
            "data": [
                {"username": "a", "viewers": 300, "is_live": true},
                {"username": "b", "viewers": null, "is_live": null, "times_seen": null}
            ]
        }"#;
        let page: Page<Streamer> = decode_page(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].viewers, 300);
        assert_eq!(page.items[1].viewers, 0);
        assert!(!page.items[1].is_live);

        let body = r#"{"success": true, "total": 1, "data": [{"query": "music", "streamers_found": null, "success": null}]}"#;
        let page: Page<ScanRecord> = decode_page(body).unwrap();
        assert_eq!(page.items[0].streamers_found, 0);
        assert!(!page.items[0].success);
    }

    #[test]
    fn test_decode_page_without_total() {
        let page: Page<String> = decode_page(r#"{"success": true, "data": ["x"]}"#).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn test_decode_search_result() {
        let body = r#"{"success": true, "query": "gaming", "total": 2, "streamers": ["a", "b"], "streamers_data": []}"#;
        let result = decode_search_result(body).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.streamers, vec!["a", "b"]);
    }

    #[test]
    fn test_decode_search_result_failure() {
        let body = r#"{"success": false, "error": "TikAPI credentials not configured"}"#;
        match decode_search_result(body).unwrap_err() {
            ApiError::Backend(msg) => assert!(msg.contains("credentials")),
            other => panic!("Expected Backend, got {:?}", other),
        }
    }
}
