//! Backend Records
//!
//! Records served by the monitoring backend. The client never owns or
//! validates these; every field falls back to its default when the backend
//! leaves it out or sends `null`, so a partial record still renders.

use serde::{Deserialize, Deserializer, Serialize};

/// A tracked account as reported by `/api/streamers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Streamer {
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Search query the backend found this account with
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub viewers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_live: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub times_seen: u64,
    /// ISO 8601 timestamp, kept verbatim
    pub first_seen: Option<String>,
    /// ISO 8601 timestamp, kept verbatim
    pub last_seen: Option<String>,
}

impl Streamer {
    /// Public profile page for this account
    pub fn profile_url(&self) -> String {
        profile_url(&self.username)
    }
}

/// Public profile page for a username
pub fn profile_url(username: &str) -> String {
    format!("https://www.tiktok.com/@{}", username.trim_start_matches('@'))
}

/// One backend scan cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanRecord {
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    pub timestamp: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub streamers_found: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub error_message: Option<String>,
}

/// Streamer count for one search query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryCount {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Aggregate statistics from `/api/statistics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    #[serde(deserialize_with = "null_as_default")]
    pub total_streamers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub live_streamers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub recent_scans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub successful_scans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_scans: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub streamers_by_query: Vec<QueryCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_streamers: Vec<Streamer>,
    /// Newest first, as served
    #[serde(deserialize_with = "null_as_default")]
    pub scan_history: Vec<ScanRecord>,
}

/// Backend health from `/health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scheduler_running: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub queries: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scrape_interval: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tikapi_configured: bool,
}

/// Result of asking the backend to scan for live accounts right now
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub streamers: Vec<String>,
}

/// An explicit `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching rows across all pages
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streamer_partial_record() {
        let json = r#"{"username": "alice", "is_live": true}"#;
        let streamer: Streamer = serde_json::from_str(json).unwrap();
        assert_eq!(streamer.username, "alice");
        assert!(streamer.is_live);
        assert_eq!(streamer.times_seen, 0);
        assert!(streamer.first_seen.is_none());
    }

    #[test]
    fn test_statistics_ignores_unknown_fields() {
        let json = r#"{
            "total_streamers": 12,
            "live_streamers": 3,
            "recent_scans": 4,
            "successful_scans": 3,
            "streamers_by_query": [{"query": "gaming", "count": 7}],
            "something_new": {"nested": true}
        }"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_streamers, 12);
        assert_eq!(stats.streamers_by_query[0].count, 7);
        assert!(stats.scan_history.is_empty());
    }

    #[test]
    fn test_scan_record_error_message_null() {
        let json = r#"{"query": "music", "timestamp": "2024-03-01T10:15:00", "streamers_found": 0, "success": false, "error_message": null}"#;
        let scan: ScanRecord = serde_json::from_str(json).unwrap();
        assert!(!scan.success);
        assert!(scan.error_message.is_none());
    }

    #[test]
    fn test_null_cells_decode_as_defaults() {
        let json = r#"{"id": 7, "username": "carol", "query": null, "viewers": null, "is_live": null, "times_seen": null, "first_seen": null}"#;
        let streamer: Streamer = serde_json::from_str(json).unwrap();
        assert_eq!(streamer.username, "carol");
        assert_eq!(streamer.query, "");
        assert_eq!(streamer.viewers, 0);
        assert!(!streamer.is_live);
        assert_eq!(streamer.times_seen, 0);

        let json = r#"{"query": "music", "streamers_found": null, "success": null}"#;
        let scan: ScanRecord = serde_json::from_str(json).unwrap();
        assert_eq!(scan.streamers_found, 0);
        assert!(!scan.success);

        let json = r#"{"total_streamers": null, "streamers_by_query": null, "top_streamers": [{"username": "dave", "times_seen": null}]}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_streamers, 0);
        assert!(stats.streamers_by_query.is_empty());
        assert_eq!(stats.top_streamers[0].username, "dave");
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("bob"), "https://www.tiktok.com/@bob");
        assert_eq!(profile_url("@bob"), "https://www.tiktok.com/@bob");
    }
}
