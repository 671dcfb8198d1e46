//! Terminal Renderer
//!
//! Prints each dashboard region as a plain-text block: tables for streamers
//! and scans, bar charts for the query share and scan series, one-line
//! status and toast messages.

use chrono::{DateTime, Local, Utc};
use std::io::Write;

use super::{Renderer, StatsView};
use crate::channel::ConnectionStatus;
use crate::format::{format_date, EMPTY};
use crate::models::{ScanRecord, Streamer};
use crate::notify::Toast;
use crate::pagination::Pagination;

/// Width of the longest bar in the text charts
const BAR_WIDTH: usize = 40;

/// Renders to any writer; stdout for the CLI, a buffer in tests
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, block: String) {
        if let Err(e) = self.out.write_all(block.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// Streamer table with a pagination footer
pub fn streamer_table(streamers: &[Streamer], pager: &Pagination) -> String {
    let mut out = String::new();
    if streamers.is_empty() {
        out.push_str("No streamers found\n");
        if pager.has_prev() {
            out.push_str(&format!("[prev] {}\n", pager.label()));
        }
        return out;
    }

    out.push_str(&format!(
        "{:<24} {:<16} {:>8} {:<8} {:>6}  {:<17} {:<17}\n",
        "Username", "Query", "Viewers", "Status", "Seen", "First seen", "Last seen"
    ));
    out.push_str(&format!("{}\n", "-".repeat(102)));
    for s in streamers {
        out.push_str(&format!(
            "{:<24} {:<16} {:>8} {:<8} {:>6}  {:<17} {:<17}\n",
            format!("@{}", s.username),
            s.query,
            s.viewers,
            if s.is_live { "LIVE" } else { "offline" },
            s.times_seen,
            format_date(s.first_seen.as_deref()),
            format_date(s.last_seen.as_deref()),
        ));
    }

    let prev = if pager.has_prev() { "[prev]" } else { "      " };
    let next = if pager.has_next() { "[next]" } else { "      " };
    out.push_str(&format!("{} {} {}\n", prev, pager.label(), next));
    out
}

/// Stat cards and both charts
pub fn statistics_block(stats: &StatsView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total streamers: {}   Live now: {}   Scans: {} ({} failed)   Success rate: {}%\n",
        stats.total_streamers,
        stats.live_streamers,
        stats.recent_scans,
        stats.failed_scans,
        stats.success_rate
    ));

    if !stats.query_share.is_empty() {
        out.push_str("\nStreamers by query\n");
        let total = stats.query_total().max(1);
        let widest = stats.query_share.iter().map(|s| s.count).max().unwrap_or(1).max(1);
        for slice in &stats.query_share {
            out.push_str(&format!(
                "  {:<16} {:<width$} {:>5} ({:>3}%)\n",
                slice.query,
                bar(slice.count, widest),
                slice.count,
                (slice.count as f64 / total as f64 * 100.0).round() as u64,
                width = BAR_WIDTH
            ));
        }
    }

    if !stats.scan_series.is_empty() {
        out.push_str("\nStreamers found per scan\n");
        let max = stats.scan_max();
        for point in &stats.scan_series {
            let marker = if point.success { ' ' } else { '!' };
            out.push_str(&format!(
                "  {}{} {:<width$} {}\n",
                marker,
                point.label,
                bar(point.streamers_found, max),
                point.streamers_found,
                width = BAR_WIDTH
            ));
        }
    }

    if !stats.top_streamers.is_empty() {
        out.push_str("\nMost seen\n");
        for s in &stats.top_streamers {
            out.push_str(&format!("  @{:<24} {:>5}x\n", s.username, s.times_seen));
        }
    }
    out
}

/// Recent scan list
pub fn scan_list(scans: &[ScanRecord]) -> String {
    if scans.is_empty() {
        return "No scans yet\n".to_string();
    }
    let mut out = String::new();
    for scan in scans {
        let outcome = if scan.success {
            format!("{} found", scan.streamers_found)
        } else {
            format!(
                "failed: {}",
                scan.error_message.as_deref().unwrap_or("unknown error")
            )
        };
        out.push_str(&format!(
            "  {:<17} {:<16} {}\n",
            format_date(scan.timestamp.as_deref()),
            scan.query,
            outcome
        ));
    }
    out
}

/// Single streamer card
pub fn streamer_detail(s: &Streamer) -> String {
    let id = s.id.map(|id| id.to_string()).unwrap_or_else(|| EMPTY.to_string());
    format!(
        "@{}\n  Status:     {}\n  Viewers:    {}\n  Query:      {}\n  Seen:       {} times\n  First seen: {}\n  Last seen:  {}\n  Profile:    {}\n  ID:         {}\n",
        s.username,
        if s.is_live { "LIVE" } else { "offline" },
        s.viewers,
        s.query,
        s.times_seen,
        format_date(s.first_seen.as_deref()),
        format_date(s.last_seen.as_deref()),
        s.profile_url(),
        id
    )
}

fn bar(value: u64, max: u64) -> String {
    let len = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
    };
    "#".repeat(len.min(BAR_WIDTH))
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_queries(&mut self, queries: &[String]) {
        let list = if queries.is_empty() {
            EMPTY.to_string()
        } else {
            queries.join(", ")
        };
        self.emit(format!("Queries: {}\n", list));
    }

    fn render_streamers(&mut self, streamers: &[Streamer], pager: &Pagination) {
        self.emit(format!("\n{}", streamer_table(streamers, pager)));
    }

    fn render_statistics(&mut self, stats: &StatsView) {
        self.emit(format!("\n{}", statistics_block(stats)));
    }

    fn render_scan_history(&mut self, scans: &[ScanRecord]) {
        self.emit(format!("\nRecent scans\n{}", scan_list(scans)));
    }

    fn render_streamer(&mut self, streamer: &Streamer) {
        self.emit(streamer_detail(streamer));
    }

    fn set_connection(&mut self, status: ConnectionStatus) {
        self.emit(format!("[channel] {}\n", status.label()));
    }

    fn set_last_update(&mut self, at: DateTime<Utc>) {
        let local = at.with_timezone(&Local);
        self.emit(format!("Last update: {}\n", local.format("%H:%M:%S")));
    }

    fn notify(&mut self, toast: Toast) {
        self.emit(format!("{} {}\n", toast.level.icon(), toast.message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QueryCount, Statistics};

    fn output(r: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.into_inner()).unwrap()
    }

    fn streamer(name: &str, live: bool) -> Streamer {
        Streamer {
            username: name.to_string(),
            query: "gaming".to_string(),
            viewers: 1200,
            is_live: live,
            times_seen: 3,
            first_seen: Some("2024-03-01T09:05:00".to_string()),
            last_seen: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_streamer_table() {
        let mut pager = Pagination::new(2);
        pager.set_total(3);
        let table = streamer_table(&[streamer("alice", true), streamer("bob", false)], &pager);

        assert!(table.contains("@alice"));
        assert!(table.contains("LIVE"));
        assert!(table.contains("offline"));
        assert!(table.contains("01/03/2024, 09:05"));
        assert!(table.contains("Page 1 of 2 (3 total)"));
        assert!(table.contains("[next]"));
        assert!(!table.contains("[prev]"));
    }

    #[test]
    fn test_empty_table() {
        let table = streamer_table(&[], &Pagination::default());
        assert_eq!(table, "No streamers found\n");
    }

    #[test]
    fn test_empty_page_past_the_end_keeps_pager() {
        let mut pager = Pagination::new(20);
        pager.set_total(60);
        pager.next();
        pager.next();
        pager.set_total(5);

        let table = streamer_table(&[], &pager);
        assert!(table.starts_with("No streamers found\n"));
        assert!(table.contains("[prev] Page 3 of 1 (5 total)"));
    }

    #[test]
    fn test_statistics_block() {
        let stats = Statistics {
            total_streamers: 10,
            live_streamers: 2,
            recent_scans: 2,
            successful_scans: 1,
            failed_scans: 1,
            streamers_by_query: vec![
                QueryCount { query: "gaming".to_string(), count: 3 },
                QueryCount { query: "music".to_string(), count: 1 },
            ],
            ..Default::default()
        };
        let text = statistics_block(&StatsView::from_statistics(&stats));

        assert!(text.contains("Success rate: 50%"));
        assert!(text.contains("Streamers by query"));
        assert!(text.contains(&"#".repeat(BAR_WIDTH)));
        assert!(text.contains("( 75%)"));
        assert!(!text.contains("Streamers found per scan"));
    }

    #[test]
    fn test_scan_list_shows_failures() {
        let scans = vec![ScanRecord {
            query: "music".to_string(),
            success: false,
            error_message: Some("rate limited".to_string()),
            ..Default::default()
        }];
        let text = scan_list(&scans);
        assert!(text.contains("failed: rate limited"));
        assert!(text.contains(EMPTY));
    }

    #[test]
    fn test_renderer_writes_toasts_and_status() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.set_connection(ConnectionStatus::Connected);
        r.notify(Toast::warning("Reconnecting in 2s..."));
        r.render_streamer(&streamer("carol", true));

        let out = output(r);
        assert!(out.contains("[channel] "));
        assert!(out.contains("Reconnecting in 2s..."));
        assert!(out.contains("https://www.tiktok.com/@carol"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(5, 10).len(), BAR_WIDTH / 2);
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(3, 0), "");
    }
}
