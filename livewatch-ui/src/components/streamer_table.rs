//! Streamer Table Component
//!
//! Current page of streamers with pagination controls.

use leptos::*;
use leptos_router::*;

use livewatch::format::format_date;
use livewatch::Streamer;

use crate::state::global::{use_controller, use_ui};

/// Streamer table with pager
#[component]
pub fn StreamerTable() -> impl IntoView {
    let ui = use_ui();
    let state = use_controller();

    let prev_state = state.clone();
    let on_prev = move |_| {
        prev_state.spawn(|c| async move {
            c.prev_page().await;
        })
    };
    let on_next = move |_| {
        state.spawn(|c| async move {
            c.next_page().await;
        })
    };

    view! {
        <div>
            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="text-left text-gray-400 border-b border-gray-700">
                            <th class="py-2 pr-4">"Username"</th>
                            <th class="py-2 pr-4">"Query"</th>
                            <th class="py-2 pr-4">"Viewers"</th>
                            <th class="py-2 pr-4">"Status"</th>
                            <th class="py-2 pr-4">"Seen"</th>
                            <th class="py-2 pr-4">"First seen"</th>
                            <th class="py-2 pr-4">"Last seen"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let streamers = ui.streamers.get();
                            if streamers.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="py-6 text-center text-gray-400">"No streamers found"</td>
                                    </tr>
                                }.into_view()
                            } else {
                                streamers.into_iter().map(|s| view! { <StreamerRow streamer=s /> }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="flex items-center justify-between mt-4">
                <button
                    on:click=on_prev
                    prop:disabled=move || !ui.pagination.get().has_prev()
                    class="px-4 py-2 rounded-lg text-sm bg-gray-700 hover:bg-gray-600 disabled:opacity-40"
                >
                    "Previous"
                </button>
                <span class="text-gray-400 text-sm">{move || ui.pagination.get().label()}</span>
                <button
                    on:click=on_next
                    prop:disabled=move || !ui.pagination.get().has_next()
                    class="px-4 py-2 rounded-lg text-sm bg-gray-700 hover:bg-gray-600 disabled:opacity-40"
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
fn StreamerRow(streamer: Streamer) -> impl IntoView {
    let (badge, badge_class) = if streamer.is_live {
        ("LIVE", "bg-red-600 text-white")
    } else {
        ("Offline", "bg-gray-600 text-gray-300")
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
            <td class="py-2 pr-4">
                <A href=format!("/streamers/{}", streamer.username) class="text-primary-400 hover:underline">
                    {format!("@{}", streamer.username)}
                </A>
                <a
                    href=streamer.profile_url()
                    target="_blank"
                    rel="noopener"
                    class="ml-2 text-gray-500 hover:text-gray-300"
                    title="Open profile"
                >
                    "↗"
                </a>
            </td>
            <td class="py-2 pr-4">{streamer.query.clone()}</td>
            <td class="py-2 pr-4">{streamer.viewers}</td>
            <td class="py-2 pr-4">
                <span class=format!("px-2 py-1 rounded text-xs font-semibold {}", badge_class)>{badge}</span>
            </td>
            <td class="py-2 pr-4">{streamer.times_seen}</td>
            <td class="py-2 pr-4 text-gray-400">{format_date(streamer.first_seen.as_deref())}</td>
            <td class="py-2 pr-4 text-gray-400">{format_date(streamer.last_seen.as_deref())}</td>
        </tr>
    }
}
