//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use livewatch::ConnectionStatus;

use crate::api;
use crate::components::{Nav, Toasts};
use crate::pages::{Dashboard, StreamerDetail};
use crate::state::global::{provide_global_state, use_ui};
use crate::state::websocket::init_websocket;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Initialize WebSocket connection
    init_websocket(&state, &api::get_api_base());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/streamers/:username" view=StreamerDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with connection status
                <Footer />

                // Toast notifications
                <Toasts />
            </div>
        </Router>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let ui = use_ui();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // WebSocket status
                <div class="flex items-center space-x-2">
                    {move || {
                        let status = ui.connection.get();
                        let (color, dot) = match status {
                            ConnectionStatus::Connected => ("text-green-400", "bg-green-400 pulse"),
                            ConnectionStatus::Connecting | ConnectionStatus::Reconnecting { .. } => {
                                ("text-yellow-400", "bg-yellow-400")
                            }
                            ConnectionStatus::Disconnected | ConnectionStatus::Failed => {
                                ("text-red-400", "bg-red-400")
                            }
                        };
                        view! {
                            <span class=format!("flex items-center space-x-1 {}", color)>
                                <span class=format!("w-2 h-2 rounded-full {}", dot) />
                                <span>{status.label()}</span>
                            </span>
                        }
                    }}
                </div>

                // Last update time
                <div class="text-gray-400">
                    {move || {
                        ui.last_update.get()
                            .map(|dt| dt.with_timezone(&chrono::Local))
                            .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if ui.loading() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
