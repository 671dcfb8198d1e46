//! Streamer Detail Page
//!
//! One tracked account, loaded by username from the route.

use leptos::*;
use leptos_router::*;

use livewatch::format::format_date;

use crate::components::Loading;
use crate::state::global::{use_controller, use_ui};

/// `/streamers/:username`
#[component]
pub fn StreamerDetail() -> impl IntoView {
    let ui = use_ui();
    let state = use_controller();
    let params = use_params_map();
    let username = move || params.with(|p| p.get("username").cloned().unwrap_or_default());

    // Reload whenever the route parameter changes
    create_effect(move |_| {
        let name = username();
        ui.detail.set(None);
        state.spawn(move |c| async move { c.load_streamer(&name).await });
    });

    view! {
        <div class="space-y-6">
            <A href="/" class="text-gray-400 hover:text-white text-sm">"← Back to dashboard"</A>

            {move || {
                let wanted = username();
                match ui.detail.get().filter(|s| s.username == wanted.trim_start_matches('@')) {
                    None => view! { <Loading /> }.into_view(),
                    Some(s) => {
                        let profile = s.profile_url();
                        view! {
                            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                                <div class="flex items-center justify-between">
                                    <h1 class="text-3xl font-bold">{format!("@{}", s.username)}</h1>
                                    {if s.is_live {
                                        view! { <span class="px-3 py-1 rounded bg-red-600 font-semibold">"LIVE"</span> }
                                    } else {
                                        view! { <span class="px-3 py-1 rounded bg-gray-600 text-gray-300">"Offline"</span> }
                                    }}
                                </div>
                                <dl class="grid grid-cols-2 gap-4 text-sm">
                                    <dt class="text-gray-400">"Viewers"</dt><dd>{s.viewers}</dd>
                                    <dt class="text-gray-400">"Found with"</dt><dd>{s.query.clone()}</dd>
                                    <dt class="text-gray-400">"Times seen"</dt><dd>{s.times_seen}</dd>
                                    <dt class="text-gray-400">"First seen"</dt><dd>{format_date(s.first_seen.as_deref())}</dd>
                                    <dt class="text-gray-400">"Last seen"</dt><dd>{format_date(s.last_seen.as_deref())}</dd>
                                </dl>
                                <a
                                    href=profile
                                    target="_blank"
                                    rel="noopener"
                                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                >
                                    "Open profile"
                                </a>
                            </section>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
