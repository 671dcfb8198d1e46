//! Dashboard Controller
//!
//! Owns the view state (filters, page, push-channel health) and wires backend
//! fetches to renderer calls. Networking and drawing are injected so the same
//! controller drives the terminal, the browser and the tests.
//!
//! Every method takes `&self`: transport callbacks, timers and UI handlers all
//! hold the same controller. Mutable state lives in `RefCell`s that are never
//! borrowed across an `.await`, so overlapping fetches are fine; whichever
//! response resolves last wins its region.

use std::cell::{Ref, RefCell};
use std::time::Duration;

use crate::api::{
    ApiError, DashboardApi, HistoryQuery, LiveFilter, StreamerFilter, StreamerQuery,
};
use crate::channel::{
    ChannelSupervisor, ConnectionStatus, PushEvent, ReconnectDecision, ReconnectPolicy,
};
use crate::notify::Toast;
use crate::pagination::Pagination;
use crate::render::{Renderer, StatsView};

/// Tunables for the data loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub page_size: u64,
    /// Statistics window in hours
    pub stats_hours: u32,
    /// Rows in the recent scan list
    pub history_limit: u64,
    pub refresh_interval: Duration,
    pub heartbeat_interval: Duration,
    pub reconnect: ReconnectPolicy,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            stats_hours: 24,
            history_limit: 10,
            refresh_interval: Duration::from_secs(120),
            heartbeat_interval: Duration::from_secs(30),
            reconnect: ReconnectPolicy::default(),
        }
    }
}

/// Filter and page state of the streamer table
#[derive(Debug, Clone)]
struct ViewState {
    filter: StreamerFilter,
    pager: Pagination,
}

/// The dashboard controller
pub struct Dashboard<A, R> {
    api: A,
    renderer: RefCell<R>,
    settings: DashboardSettings,
    view: RefCell<ViewState>,
    channel: RefCell<ChannelSupervisor>,
}

impl<A: DashboardApi, R: Renderer> Dashboard<A, R> {
    pub fn new(api: A, renderer: R, settings: DashboardSettings) -> Self {
        Self {
            api,
            renderer: RefCell::new(renderer),
            settings,
            view: RefCell::new(ViewState {
                filter: StreamerFilter::default(),
                pager: Pagination::new(settings.page_size),
            }),
            channel: RefCell::new(ChannelSupervisor::new(settings.reconnect)),
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn renderer(&self) -> Ref<'_, R> {
        self.renderer.borrow()
    }

    pub fn pagination(&self) -> Pagination {
        self.view.borrow().pager
    }

    pub fn filter(&self) -> StreamerFilter {
        self.view.borrow().filter.clone()
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.channel.borrow().status()
    }

    /// Heartbeats go out only while this is true
    pub fn is_channel_open(&self) -> bool {
        self.channel.borrow().is_open()
    }

    fn notify(&self, toast: Toast) {
        self.renderer.borrow_mut().notify(toast);
    }

    fn report(&self, what: &str, error: &ApiError) {
        tracing::warn!(error = %error, "Error loading {}", what);
        self.notify(Toast::error(format!("Error loading {}", what)));
    }

    // ============ Data Loading ============

    /// Queries, streamers, statistics, then scan history
    pub async fn load_initial(&self) {
        self.load_queries().await;
        self.load_streamers().await;
        self.load_statistics().await;
        self.load_scan_history().await;
    }

    /// Refresh button: streamers and statistics
    pub async fn refresh(&self) {
        self.load_streamers().await;
        self.load_statistics().await;
    }

    pub async fn load_queries(&self) {
        match self.api.queries().await {
            Ok(queries) => self.renderer.borrow_mut().render_queries(&queries),
            Err(e) => self.report("queries", &e),
        }
    }

    pub async fn load_streamers(&self) {
        let request = {
            let view = self.view.borrow();
            StreamerQuery {
                limit: view.pager.page_size(),
                offset: view.pager.offset(),
                filter: view.filter.clone(),
            }
        };

        match self.api.streamers(&request).await {
            Ok(page) => {
                let pager = {
                    let mut view = self.view.borrow_mut();
                    view.pager.set_total(page.total);
                    view.pager
                };
                tracing::debug!(rows = page.items.len(), total = page.total, "Loaded streamers");
                let mut renderer = self.renderer.borrow_mut();
                renderer.render_streamers(&page.items, &pager);
                renderer.set_last_update(chrono::Utc::now());
            }
            Err(e) => self.report("streamers", &e),
        }
    }

    pub async fn load_statistics(&self) {
        match self.api.statistics(self.settings.stats_hours).await {
            Ok(stats) => {
                let view = StatsView::from_statistics(&stats);
                self.renderer.borrow_mut().render_statistics(&view);
            }
            Err(e) => self.report("statistics", &e),
        }
    }

    pub async fn load_scan_history(&self) {
        let query = HistoryQuery::latest(self.settings.history_limit);
        match self.api.scan_history(query).await {
            Ok(page) => self.renderer.borrow_mut().render_scan_history(&page.items),
            Err(e) => self.report("scan history", &e),
        }
    }

    pub async fn load_streamer(&self, username: &str) {
        match self.api.streamer(username).await {
            Ok(streamer) => self.renderer.borrow_mut().render_streamer(&streamer),
            Err(e) => {
                tracing::warn!(error = %e, username = %username, "Error loading streamer");
                self.notify(Toast::error(format!("Error loading @{}", username)));
            }
        }
    }

    /// Ask the backend to scan `query` now, then refresh what it affects
    pub async fn search_live(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.notify(Toast::warning("Enter a search query first"));
            return;
        }

        match self.api.search_live(query).await {
            Ok(result) => {
                tracing::info!(query = %query, found = result.total, "Live search finished");
                self.notify(Toast::success(format!(
                    "Found {} live streamers for \"{}\"",
                    result.total, query
                )));
                self.refresh().await;
                self.load_scan_history().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "Live search failed");
                self.notify(Toast::error(format!("Search failed: {}", e)));
            }
        }
    }

    // ============ Filters & Paging ============

    /// Replace both filters and go back to page 1 without loading. Used to
    /// seed the view before [`load_initial`](Self::load_initial).
    pub fn set_filter(&self, filter: StreamerFilter) {
        let mut view = self.view.borrow_mut();
        view.filter = filter;
        view.pager.reset();
    }

    /// Query filter changed: back to page 1 and reload
    pub async fn set_query_filter(&self, query: Option<String>) {
        {
            let mut view = self.view.borrow_mut();
            view.filter.set_query(query);
            view.pager.reset();
        }
        self.load_streamers().await;
    }

    /// Live-status filter changed: back to page 1 and reload
    pub async fn set_live_filter(&self, live: LiveFilter) {
        {
            let mut view = self.view.borrow_mut();
            view.filter.live = live;
            view.pager.reset();
        }
        self.load_streamers().await;
    }

    /// Next page if there is one. Returns whether the page changed.
    pub async fn next_page(&self) -> bool {
        let moved = self.view.borrow_mut().pager.next();
        if moved {
            self.load_streamers().await;
        }
        moved
    }

    /// Previous page if not on the first. Returns whether the page changed.
    pub async fn prev_page(&self) -> bool {
        let moved = self.view.borrow_mut().pager.prev();
        if moved {
            self.load_streamers().await;
        }
        moved
    }

    /// Periodic auto-refresh of the streamer table
    pub async fn auto_refresh(&self) {
        tracing::debug!("Auto-refreshing streamers");
        self.load_streamers().await;
    }

    // ============ Push Channel ============

    /// A connection attempt is starting
    pub fn channel_connecting(&self) {
        let status = {
            let mut channel = self.channel.borrow_mut();
            channel.on_connecting();
            channel.status()
        };
        self.renderer.borrow_mut().set_connection(status);
    }

    /// Channel opened
    pub fn channel_opened(&self) {
        tracing::info!("Push channel connected");
        self.channel.borrow_mut().on_open();
        let mut renderer = self.renderer.borrow_mut();
        renderer.set_connection(ConnectionStatus::Connected);
        renderer.notify(Toast::success("Connected to server"));
    }

    /// Transport error; a close always follows
    pub fn channel_error(&self, error: &str) {
        tracing::warn!(error = %error, "Push channel error");
        let status = {
            let mut channel = self.channel.borrow_mut();
            channel.on_error();
            channel.status()
        };
        self.renderer.borrow_mut().set_connection(status);
    }

    /// Channel closed: the caller schedules the reconnect the decision names
    pub fn channel_closed(&self) -> ReconnectDecision {
        let (already_failed, decision, status) = {
            let mut channel = self.channel.borrow_mut();
            let already_failed = channel.status() == ConnectionStatus::Failed;
            let decision = channel.on_close();
            (already_failed, decision, channel.status())
        };

        let mut renderer = self.renderer.borrow_mut();
        renderer.set_connection(status);
        match decision {
            ReconnectDecision::Retry { attempt, delay } => {
                tracing::info!(attempt, delay_ms = delay.as_millis() as u64, "Push channel closed, reconnecting");
                renderer.notify(Toast::warning(format!(
                    "Reconnecting in {}s...",
                    delay.as_secs_f64()
                )));
            }
            ReconnectDecision::GiveUp { attempts } if !already_failed => {
                tracing::error!(attempts, "Push channel reconnect attempts exhausted");
                renderer.notify(
                    Toast::error("Could not reconnect. Reload to try again.")
                        .lasting(Duration::from_secs(10)),
                );
            }
            ReconnectDecision::GiveUp { .. } => {}
        }
        decision
    }

    /// Dispatch one inbound text frame. Unknown and malformed frames are
    /// logged and ignored.
    pub async fn handle_message(&self, text: &str) -> Option<PushEvent> {
        let event = match PushEvent::parse(text) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring push frame");
                return None;
            }
        };

        match &event {
            PushEvent::ScanComplete { .. } => {
                self.notify(Toast::success("Scan complete"));
                self.load_streamers().await;
                self.load_statistics().await;
            }
            PushEvent::NewStreamer { username, .. } => {
                self.notify(Toast::info(format!("New streamer: @{}", username)));
                self.load_streamers().await;
            }
            PushEvent::Pong => {
                tracing::trace!("Heartbeat acknowledged");
            }
            PushEvent::Unknown { kind } => {
                tracing::debug!(kind = %kind, "Unknown push message type");
            }
        }
        Some(event)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::ApiResult;
    use crate::models::{
        Health, LiveSearchResult, Page, QueryCount, ScanRecord, Statistics, Streamer,
    };
    use crate::notify::ToastLevel;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::cell::{Cell, RefCell};

    /// In-memory backend with a fixed population of streamers
    #[derive(Default)]
    pub struct FakeApi {
        pub streamers: Vec<Streamer>,
        pub fail: Cell<bool>,
        pub requests: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub fn with_streamers(n: usize) -> Self {
            Self {
                streamers: (0..n)
                    .map(|i| Streamer {
                        username: format!("user{}", i),
                        query: if i % 2 == 0 { "gaming" } else { "music" }.to_string(),
                        is_live: i % 3 == 0,
                        times_seen: 1,
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            }
        }

        fn log(&self, request: String) -> ApiResult<()> {
            self.requests.borrow_mut().push(request);
            if self.fail.get() {
                Err(ApiError::Unavailable("connection refused".to_string()))
            } else {
                Ok(())
            }
        }

        pub fn count(&self, prefix: &str) -> usize {
            self.requests
                .borrow()
                .iter()
                .filter(|r| r.starts_with(prefix))
                .count()
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeApi {
        async fn queries(&self) -> ApiResult<Vec<String>> {
            self.log("queries".to_string())?;
            Ok(vec!["gaming".to_string(), "music".to_string()])
        }

        async fn streamers(&self, query: &StreamerQuery) -> ApiResult<Page<Streamer>> {
            self.log(format!("streamers?{}", query.to_query_string()))?;
            let matching: Vec<Streamer> = self
                .streamers
                .iter()
                .filter(|s| query.filter.query.as_deref().map_or(true, |q| s.query == q))
                .filter(|s| match query.filter.live {
                    LiveFilter::All => true,
                    LiveFilter::Live => s.is_live,
                    LiveFilter::Offline => !s.is_live,
                })
                .cloned()
                .collect();
            let total = matching.len() as u64;
            Ok(Page {
                items: matching
                    .into_iter()
                    .skip(query.offset as usize)
                    .take(query.limit as usize)
                    .collect(),
                total,
                limit: query.limit,
                offset: query.offset,
            })
        }

        async fn streamer(&self, username: &str) -> ApiResult<Streamer> {
            self.log(format!("streamer/{}", username))?;
            self.streamers
                .iter()
                .find(|s| s.username == username)
                .cloned()
                .ok_or_else(|| ApiError::Backend("Streamer not found".to_string()))
        }

        async fn statistics(&self, hours: u32) -> ApiResult<Statistics> {
            self.log(format!("statistics?hours={}", hours))?;
            Ok(Statistics {
                total_streamers: self.streamers.len() as u64,
                recent_scans: 4,
                successful_scans: 3,
                streamers_by_query: vec![QueryCount {
                    query: "gaming".to_string(),
                    count: 2,
                }],
                ..Default::default()
            })
        }

        async fn scan_history(&self, query: HistoryQuery) -> ApiResult<Page<ScanRecord>> {
            self.log(format!("scan-history?{}", query.to_query_string()))?;
            Ok(Page {
                items: vec![ScanRecord::default(); 2],
                total: 2,
                limit: query.limit,
                offset: 0,
            })
        }

        async fn search_live(&self, query: &str) -> ApiResult<LiveSearchResult> {
            self.log(format!("search-live?query={}", query))?;
            Ok(LiveSearchResult {
                query: query.to_string(),
                total: 3,
                streamers: vec![],
            })
        }

        async fn health(&self) -> ApiResult<Health> {
            self.log("health".to_string())?;
            Ok(Health::default())
        }
    }

    /// Records every render call
    #[derive(Default)]
    pub struct Recorder {
        pub queries: Vec<String>,
        pub streamers: Vec<Streamer>,
        pub pager: Option<Pagination>,
        pub stats: Option<StatsView>,
        pub scans: Vec<ScanRecord>,
        pub detail: Option<Streamer>,
        pub statuses: Vec<ConnectionStatus>,
        pub last_update: Option<DateTime<Utc>>,
        pub toasts: Vec<Toast>,
    }

    impl Recorder {
        pub fn toast_levels(&self) -> Vec<ToastLevel> {
            self.toasts.iter().map(|t| t.level).collect()
        }
    }

    impl Renderer for Recorder {
        fn render_queries(&mut self, queries: &[String]) {
            self.queries = queries.to_vec();
        }

        fn render_streamers(&mut self, streamers: &[Streamer], pager: &Pagination) {
            self.streamers = streamers.to_vec();
            self.pager = Some(*pager);
        }

        fn render_statistics(&mut self, stats: &StatsView) {
            self.stats = Some(stats.clone());
        }

        fn render_scan_history(&mut self, scans: &[ScanRecord]) {
            self.scans = scans.to_vec();
        }

        fn render_streamer(&mut self, streamer: &Streamer) {
            self.detail = Some(streamer.clone());
        }

        fn set_connection(&mut self, status: ConnectionStatus) {
            self.statuses.push(status);
        }

        fn set_last_update(&mut self, at: DateTime<Utc>) {
            self.last_update = Some(at);
        }

        fn notify(&mut self, toast: Toast) {
            self.toasts.push(toast);
        }
    }

    fn dashboard(n: usize) -> Dashboard<FakeApi, Recorder> {
        Dashboard::new(
            FakeApi::with_streamers(n),
            Recorder::default(),
            DashboardSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_initial_load_order() {
        let dash = dashboard(45);
        dash.load_initial().await;

        let requests = dash.api().requests.borrow().clone();
        assert_eq!(
            requests,
            vec![
                "queries",
                "streamers?limit=20&offset=0",
                "statistics?hours=24",
                "scan-history?limit=10",
            ]
        );

        let r = dash.renderer();
        assert_eq!(r.queries, vec!["gaming", "music"]);
        assert_eq!(r.streamers.len(), 20);
        assert_eq!(r.pager.unwrap().total(), 45);
        assert_eq!(r.stats.as_ref().unwrap().success_rate, 75);
        assert_eq!(r.scans.len(), 2);
        assert!(r.last_update.is_some());
        assert!(r.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_filter_used_by_initial_load() {
        let dash = dashboard(10);
        let mut filter = StreamerFilter::default();
        filter.set_query(Some("gaming".to_string()));
        filter.live = LiveFilter::Offline;
        dash.set_filter(filter);
        dash.load_initial().await;

        assert_eq!(dash.api().requests.borrow()[1], "streamers?limit=20&offset=0&query=gaming&is_live=false");
        assert!(dash.renderer().streamers.iter().all(|s| s.query == "gaming" && !s.is_live));
    }

    #[tokio::test]
    async fn test_filter_survives_reload() {
        let dash = dashboard(45);
        dash.load_initial().await;
        dash.set_query_filter(Some("music".to_string())).await;
        dash.set_live_filter(LiveFilter::Live).await;

        // A fresh view of the same controller starts from the stored filter
        let filter = dash.filter();
        assert_eq!(filter.query.as_deref(), Some("music"));
        assert_eq!(filter.live, LiveFilter::Live);

        dash.load_initial().await;
        let last_list = dash
            .api()
            .requests
            .borrow()
            .iter()
            .rev()
            .find(|r| r.starts_with("streamers?"))
            .cloned()
            .unwrap();
        assert_eq!(last_list, "streamers?limit=20&offset=0&query=music&is_live=true");
    }

    #[tokio::test]
    async fn test_paging_stops_at_boundaries() {
        let dash = dashboard(45);
        dash.load_streamers().await;

        assert!(!dash.prev_page().await);
        assert!(dash.next_page().await);
        assert!(dash.next_page().await);
        assert!(!dash.next_page().await);

        let pager = dash.pagination();
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next());
        assert!(pager.has_prev());
        assert_eq!(dash.renderer().streamers.len(), 5);
        // Initial load plus two successful moves
        assert_eq!(dash.api().count("streamers"), 3);
    }

    #[tokio::test]
    async fn test_filter_change_resets_page() {
        let dash = dashboard(45);
        dash.load_streamers().await;
        dash.next_page().await;
        assert_eq!(dash.pagination().page(), 2);

        dash.set_query_filter(Some("music".to_string())).await;
        assert_eq!(dash.pagination().page(), 1);
        assert_eq!(dash.pagination().total(), 22);
        assert!(dash.renderer().streamers.iter().all(|s| s.query == "music"));

        dash.next_page().await;
        dash.set_live_filter(LiveFilter::Live).await;
        assert_eq!(dash.pagination().page(), 1);

        let last = dash.api().requests.borrow().last().cloned().unwrap();
        assert_eq!(last, "streamers?limit=20&offset=0&query=music&is_live=true");
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_toast() {
        let dash = dashboard(5);
        dash.api().fail.set(true);
        dash.load_initial().await;

        let r = dash.renderer();
        assert_eq!(r.toasts.len(), 4);
        assert!(r.toasts.iter().all(|t| t.level == ToastLevel::Error));
        assert_eq!(r.toasts[1].message, "Error loading streamers");
        assert!(r.streamers.is_empty());
        assert!(r.last_update.is_none());
    }

    #[tokio::test]
    async fn test_scan_complete_reloads_list_and_stats() {
        let dash = dashboard(5);
        let event = dash
            .handle_message(r#"{"type": "scan_complete", "data": {}}"#)
            .await;
        assert!(matches!(event, Some(PushEvent::ScanComplete { .. })));
        assert_eq!(dash.api().count("streamers"), 1);
        assert_eq!(dash.api().count("statistics"), 1);
        assert_eq!(dash.renderer().toast_levels(), vec![ToastLevel::Success]);
    }

    #[tokio::test]
    async fn test_new_streamer_reloads_list_only() {
        let dash = dashboard(5);
        dash.handle_message(r#"{"type": "new_streamer", "data": {"username": "neo"}}"#)
            .await;
        assert_eq!(dash.api().count("streamers"), 1);
        assert_eq!(dash.api().count("statistics"), 0);
        assert_eq!(dash.renderer().toasts[0].message, "New streamer: @neo");
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_messages_ignored() {
        let dash = dashboard(5);
        let unknown = dash
            .handle_message(r#"{"type": "server_restart", "data": null}"#)
            .await;
        assert!(matches!(unknown, Some(PushEvent::Unknown { .. })));
        assert!(dash.handle_message("not json").await.is_none());
        assert_eq!(dash.handle_message(r#"{"type": "pong"}"#).await, Some(PushEvent::Pong));

        assert!(dash.api().requests.borrow().is_empty());
        assert!(dash.renderer().toasts.is_empty());
    }

    #[tokio::test]
    async fn test_reconnect_until_exhausted() {
        let settings = DashboardSettings {
            reconnect: ReconnectPolicy {
                max_attempts: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        let dash = Dashboard::new(FakeApi::default(), Recorder::default(), settings);

        dash.channel_opened();
        assert!(dash.is_channel_open());

        let mut delays = Vec::new();
        loop {
            match dash.channel_closed() {
                ReconnectDecision::Retry { delay, .. } => {
                    assert!(!dash.is_channel_open());
                    delays.push(delay);
                }
                ReconnectDecision::GiveUp { attempts } => {
                    assert_eq!(attempts, 3);
                    break;
                }
            }
        }
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8)
            ]
        );
        assert_eq!(dash.connection_status(), ConnectionStatus::Failed);

        // A late close after giving up does not repeat the terminal toast
        dash.channel_closed();
        let r = dash.renderer();
        let levels = r.toast_levels();
        assert_eq!(
            levels,
            vec![
                ToastLevel::Success,
                ToastLevel::Warning,
                ToastLevel::Warning,
                ToastLevel::Warning,
                ToastLevel::Error,
            ]
        );
        assert_eq!(r.toasts[1].message, "Reconnecting in 2s...");
        assert_eq!(*r.statuses.last().unwrap(), ConnectionStatus::Failed);
    }

    #[tokio::test]
    async fn test_open_resets_retry_counter() {
        let dash = dashboard(0);
        dash.channel_closed();
        dash.channel_closed();
        dash.channel_opened();
        assert_eq!(
            dash.channel_closed(),
            ReconnectDecision::Retry {
                attempt: 1,
                delay: Duration::from_secs(2)
            }
        );
    }

    #[tokio::test]
    async fn test_channel_error_marks_disconnected() {
        let dash = dashboard(0);
        dash.channel_opened();
        dash.channel_error("connection reset");
        assert!(!dash.is_channel_open());
        assert_eq!(dash.connection_status(), ConnectionStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_search_live_refreshes() {
        let dash = dashboard(3);
        dash.search_live("  gaming ").await;
        assert_eq!(dash.api().count("search-live?query=gaming"), 1);
        assert_eq!(dash.api().count("streamers"), 1);
        assert_eq!(dash.api().count("statistics"), 1);
        assert_eq!(dash.api().count("scan-history"), 1);

        dash.search_live("   ").await;
        assert_eq!(dash.api().count("search-live"), 1);
        assert_eq!(dash.renderer().toasts.last().unwrap().level, ToastLevel::Warning);
    }

    #[tokio::test]
    async fn test_load_streamer_detail() {
        let dash = dashboard(3);
        dash.load_streamer("user2").await;
        assert_eq!(dash.renderer().detail.as_ref().unwrap().username, "user2");

        dash.load_streamer("ghost").await;
        assert_eq!(dash.renderer().toasts.last().unwrap().message, "Error loading @ghost");
    }
}
