//! Global Application State
//!
//! Reactive state written by the renderer, and the shared dashboard
//! controller.

use leptos::*;
use std::rc::Rc;

use livewatch::render::StatsView;
use livewatch::{
    ConnectionStatus, Dashboard, DashboardSettings, Pagination, ScanRecord, Streamer, Toast,
};

use super::render::SignalRenderer;
use crate::api::{get_api_base, GlooApi};

/// The controller shared by every component
pub type Controller = Rc<Dashboard<GlooApi, SignalRenderer>>;

/// Signals the renderer writes and the components read
#[derive(Clone, Copy)]
pub struct UiState {
    /// Options of the query filter
    pub queries: RwSignal<Vec<String>>,
    /// Current page of the streamer table
    pub streamers: RwSignal<Vec<Streamer>>,
    pub pagination: RwSignal<Pagination>,
    /// `None` until statistics first load
    pub stats: RwSignal<Option<StatsView>>,
    pub scans: RwSignal<Vec<ScanRecord>>,
    /// Streamer shown on the detail page
    pub detail: RwSignal<Option<Streamer>>,
    pub connection: RwSignal<ConnectionStatus>,
    pub last_update: RwSignal<Option<chrono::DateTime<chrono::Utc>>>,
    /// Visible toasts with their ids
    pub toasts: RwSignal<Vec<(u64, Toast)>>,
    /// Number of loads in flight
    pub pending: RwSignal<u32>,
}

impl UiState {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            queries: create_rw_signal(Vec::new()),
            streamers: create_rw_signal(Vec::new()),
            pagination: create_rw_signal(Pagination::new(settings.page_size)),
            stats: create_rw_signal(None),
            scans: create_rw_signal(Vec::new()),
            detail: create_rw_signal(None),
            connection: create_rw_signal(ConnectionStatus::Connecting),
            last_update: create_rw_signal(None),
            toasts: create_rw_signal(Vec::new()),
            pending: create_rw_signal(0),
        }
    }

    pub fn loading(&self) -> bool {
        self.pending.get() > 0
    }
}

/// Everything provided through context
#[derive(Clone)]
pub struct GlobalState {
    pub ui: UiState,
    pub controller: Controller,
}

impl GlobalState {
    /// Run a controller action in the background, tracking it as a load
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Controller) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let controller = Rc::clone(&self.controller);
        let pending = self.ui.pending;
        pending.update(|n| *n += 1);
        spawn_local(async move {
            action(controller).await;
            pending.update(|n| *n = n.saturating_sub(1));
        });
    }
}

/// Create the controller and provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let settings = DashboardSettings::default();
    let ui = UiState::new(&settings);
    let api = GlooApi::new(get_api_base());
    let controller = Rc::new(Dashboard::new(api, SignalRenderer::new(ui), settings));

    let state = GlobalState { ui, controller };
    provide_context(state.clone());
    provide_context(ui);
    state
}

pub fn use_ui() -> UiState {
    use_context::<UiState>().expect("UiState not found")
}

pub fn use_controller() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
