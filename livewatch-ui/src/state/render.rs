//! Signal Renderer
//!
//! Renders dashboard regions by writing Leptos signals; components redraw
//! from them.

use chrono::{DateTime, Utc};
use leptos::*;

use livewatch::render::{Renderer, StatsView};
use livewatch::{ConnectionStatus, Pagination, ScanRecord, Streamer, Toast};

use super::global::UiState;

pub struct SignalRenderer {
    ui: UiState,
    next_toast: u64,
}

impl SignalRenderer {
    pub fn new(ui: UiState) -> Self {
        Self { ui, next_toast: 0 }
    }
}

impl Renderer for SignalRenderer {
    fn render_queries(&mut self, queries: &[String]) {
        self.ui.queries.set(queries.to_vec());
    }

    fn render_streamers(&mut self, streamers: &[Streamer], pager: &Pagination) {
        self.ui.streamers.set(streamers.to_vec());
        self.ui.pagination.set(*pager);
    }

    fn render_statistics(&mut self, stats: &StatsView) {
        self.ui.stats.set(Some(stats.clone()));
    }

    fn render_scan_history(&mut self, scans: &[ScanRecord]) {
        self.ui.scans.set(scans.to_vec());
    }

    fn render_streamer(&mut self, streamer: &Streamer) {
        self.ui.detail.set(Some(streamer.clone()));
    }

    fn set_connection(&mut self, status: ConnectionStatus) {
        self.ui.connection.set(status);
    }

    fn set_last_update(&mut self, at: DateTime<Utc>) {
        self.ui.last_update.set(Some(at));
    }

    fn notify(&mut self, toast: Toast) {
        let id = self.next_toast;
        self.next_toast += 1;

        let millis = toast.duration.as_millis() as u32;
        if toast.level == livewatch::ToastLevel::Error {
            web_sys::console::error_1(&toast.message.as_str().into());
        }
        self.ui.toasts.update(|toasts| toasts.push((id, toast)));

        let toasts = self.ui.toasts;
        gloo_timers::callback::Timeout::new(millis, move || {
            toasts.update(|toasts| toasts.retain(|(tid, _)| *tid != id));
        })
        .forget();
    }
}
