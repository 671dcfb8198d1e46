//! Request Parameters
//!
//! Query-string builders for the listing endpoints.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Live-status filter for the streamer table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveFilter {
    #[default]
    All,
    Live,
    Offline,
}

impl LiveFilter {
    /// Value of the `is_live` parameter, if any
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            LiveFilter::All => None,
            LiveFilter::Live => Some("true"),
            LiveFilter::Offline => Some("false"),
        }
    }
}

impl fmt::Display for LiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveFilter::All => write!(f, "all"),
            LiveFilter::Live => write!(f, "live"),
            LiveFilter::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for LiveFilter {
    type Err = String;

    /// Accepts the select values of the dashboard (`""`, `true`, `false`)
    /// as well as `all`, `live`, `offline`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(LiveFilter::All),
            "true" | "live" => Ok(LiveFilter::Live),
            "false" | "offline" => Ok(LiveFilter::Offline),
            other => Err(format!("Invalid live filter: {}. Use: all, live, offline", other)),
        }
    }
}

/// Filters applied to the streamer table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamerFilter {
    /// Search query the streamer was found with; `None` shows all
    pub query: Option<String>,
    pub live: LiveFilter,
}

impl StreamerFilter {
    /// Normalize a select value: empty means no query filter
    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query.filter(|q| !q.trim().is_empty());
    }
}

/// Parameters for `GET /api/streamers`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamerQuery {
    pub limit: u64,
    pub offset: u64,
    pub filter: StreamerFilter,
}

impl StreamerQuery {
    /// `limit=20&offset=0&query=...&is_live=true`
    pub fn to_query_string(&self) -> String {
        let mut qs = format!("limit={}&offset={}", self.limit, self.offset);
        if let Some(query) = &self.filter.query {
            qs.push_str(&format!("&query={}", urlencoding::encode(query)));
        }
        if let Some(live) = self.filter.live.as_param() {
            qs.push_str(&format!("&is_live={}", live));
        }
        qs
    }
}

/// Parameters for `GET /api/scan-history`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub limit: u64,
    pub offset: u64,
}

impl HistoryQuery {
    pub fn latest(limit: u64) -> Self {
        Self { limit, offset: 0 }
    }

    pub fn to_query_string(&self) -> String {
        if self.offset == 0 {
            format!("limit={}", self.limit)
        } else {
            format!("limit={}&offset={}", self.limit, self.offset)
        }
    }
}
