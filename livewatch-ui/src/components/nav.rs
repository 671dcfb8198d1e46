//! Navigation Component
//!
//! Header bar with the brand and the backend health badge.

use leptos::*;
use leptos_router::*;

use livewatch::{DashboardApi, Health};

use crate::state::global::use_controller;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📡"</span>
                        <span class="text-xl font-bold text-white">"Livewatch"</span>
                    </A>

                    <div class="flex items-center space-x-4">
                        <A
                            href="/"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                            active_class="bg-gray-700 text-white"
                            exact=true
                        >
                            "Dashboard"
                        </A>
                        <HealthBadge />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Scheduler state reported by `/health`, fetched once on mount
#[component]
fn HealthBadge() -> impl IntoView {
    let state = use_controller();
    let health = create_rw_signal::<Option<Result<Health, String>>>(None);

    let controller = state.controller.clone();
    spawn_local(async move {
        let result = controller.api().health().await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Health check failed: {}", e).into());
        }
        health.set(Some(result));
    });

    view! {
        {move || match health.get() {
            None => view! { <span class="text-gray-500 text-sm">"Checking backend..."</span> }.into_view(),
            Some(Ok(h)) => {
                let (label, class) = if h.scheduler_running {
                    ("Scheduler running", "text-green-400")
                } else {
                    ("Scheduler stopped", "text-yellow-400")
                };
                let title = format!("Status: {} | Queries: {} | Interval: {}", h.status, h.queries.join(", "), h.scrape_interval);
                view! { <span class=format!("text-sm {}", class) title=title>{label}</span> }.into_view()
            }
            Some(Err(_)) => view! { <span class="text-sm text-red-400">"Backend unreachable"</span> }.into_view(),
        }}
    }
}
