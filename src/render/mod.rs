//! Rendering
//!
//! The [`Renderer`] trait is the seam between the dashboard controller and
//! whatever draws it: the terminal in the native build, Leptos signals in the
//! browser, a recorder in tests. View models here turn backend records into
//! what the stat cards and charts display.

#[cfg(feature = "native")]
pub mod terminal;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::channel::ConnectionStatus;
use crate::format::{format_time, success_rate};
use crate::models::{ScanRecord, Statistics, Streamer};
use crate::notify::Toast;
use crate::pagination::Pagination;

/// Colors cycled through the query-share chart
pub const CHART_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// Draws dashboard regions. Each call replaces the region wholesale.
pub trait Renderer {
    /// Options of the query filter
    fn render_queries(&mut self, queries: &[String]);

    /// Streamer table and its pagination controls
    fn render_streamers(&mut self, streamers: &[Streamer], pager: &Pagination);

    /// Stat cards, query-share chart and scan-history chart
    fn render_statistics(&mut self, stats: &StatsView);

    /// Recent scan list
    fn render_scan_history(&mut self, scans: &[ScanRecord]);

    /// Single streamer detail
    fn render_streamer(&mut self, streamer: &Streamer);

    /// Push-channel indicator
    fn set_connection(&mut self, status: ConnectionStatus);

    /// "Last update" stamp, set whenever the streamer table refreshes
    fn set_last_update(&mut self, at: DateTime<Utc>);

    /// Transient notification
    fn notify(&mut self, toast: Toast);
}

/// One slice of the query-share doughnut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySlice {
    pub query: String,
    pub count: u64,
    pub color: &'static str,
}

/// One point of the scan-history line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanPoint {
    /// `HH:MM` of the scan
    pub label: String,
    pub streamers_found: u64,
    pub success: bool,
}

/// Everything the statistics region shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsView {
    pub total_streamers: u64,
    pub live_streamers: u64,
    pub recent_scans: u64,
    pub failed_scans: u64,
    /// Whole percent of successful scans
    pub success_rate: u32,
    pub query_share: Vec<QuerySlice>,
    /// Oldest first
    pub scan_series: Vec<ScanPoint>,
    pub top_streamers: Vec<Streamer>,
}

impl StatsView {
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            total_streamers: stats.total_streamers,
            live_streamers: stats.live_streamers,
            recent_scans: stats.recent_scans,
            failed_scans: stats.failed_scans,
            success_rate: success_rate(stats.successful_scans, stats.recent_scans),
            query_share: query_share(stats),
            scan_series: scan_series(&stats.scan_history),
            top_streamers: stats.top_streamers.clone(),
        }
    }

    /// Sum of all slices, for computing slice angles
    pub fn query_total(&self) -> u64 {
        self.query_share.iter().map(|s| s.count).sum()
    }

    /// Largest value on the scan chart; at least 1 so the y axis is never flat
    pub fn scan_max(&self) -> u64 {
        self.scan_series
            .iter()
            .map(|p| p.streamers_found)
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

fn query_share(stats: &Statistics) -> Vec<QuerySlice> {
    stats
        .streamers_by_query
        .iter()
        .enumerate()
        .map(|(idx, qc)| QuerySlice {
            query: qc.query.clone(),
            count: qc.count,
            color: CHART_PALETTE[idx % CHART_PALETTE.len()],
        })
        .collect()
}

/// Scan history arrives newest first; charts read left to right
fn scan_series(history: &[ScanRecord]) -> Vec<ScanPoint> {
    history
        .iter()
        .rev()
        .map(|scan| ScanPoint {
            label: format_time(scan.timestamp.as_deref()),
            streamers_found: scan.streamers_found,
            success: scan.success,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryCount;

    fn scan(ts: &str, found: u64) -> ScanRecord {
        ScanRecord {
            query: "gaming".to_string(),
            timestamp: Some(ts.to_string()),
            streamers_found: found,
            success: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_view() {
        let stats = Statistics {
            total_streamers: 50,
            live_streamers: 8,
            recent_scans: 4,
            successful_scans: 3,
            failed_scans: 1,
            streamers_by_query: (0..7)
                .map(|i| QueryCount {
                    query: format!("q{}", i),
                    count: i + 1,
                })
                .collect(),
            scan_history: vec![
                scan("2024-03-01T12:10:00", 5),
                scan("2024-03-01T12:05:00", 3),
                scan("2024-03-01T12:00:00", 0),
            ],
            ..Default::default()
        };

        let view = StatsView::from_statistics(&stats);
        assert_eq!(view.success_rate, 75);
        assert_eq!(view.query_total(), 28);
        assert_eq!(view.query_share[0].color, "#FF6384");
        assert_eq!(view.query_share[6].color, CHART_PALETTE[0]);

        let labels: Vec<&str> = view.scan_series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["12:00", "12:05", "12:10"]);
        assert_eq!(view.scan_max(), 5);
    }

    #[test]
    fn test_empty_stats() {
        let view = StatsView::from_statistics(&Statistics::default());
        assert_eq!(view.success_rate, 0);
        assert_eq!(view.scan_max(), 1);
        assert!(view.query_share.is_empty());
    }
}
