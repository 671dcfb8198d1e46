//! Filter Bar Component
//!
//! Query and live-status selects, refresh and live search.

use leptos::*;

use livewatch::LiveFilter;

use crate::state::global::{use_controller, use_ui};

/// Filter bar above the streamer table
#[component]
pub fn Filters() -> impl IntoView {
    let ui = use_ui();
    let state = use_controller();
    let (search, set_search) = create_signal(String::new());

    // The controller outlives this component; start from its filter
    let current = state.controller.filter();
    let (query, set_query) = create_signal(current.query.unwrap_or_default());
    let (live, set_live) = create_signal(live_value(current.live));

    let on_query = {
        let state = state.clone();
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            set_query.set(value.clone());
            let query = (!value.is_empty()).then_some(value);
            state.spawn(move |c| async move { c.set_query_filter(query).await });
        }
    };

    let on_live = {
        let state = state.clone();
        move |ev: ev::Event| {
            let live = event_target_value(&ev).parse().unwrap_or(LiveFilter::All);
            set_live.set(live_value(live));
            state.spawn(move |c| async move { c.set_live_filter(live).await });
        }
    };

    let on_refresh = {
        let state = state.clone();
        move |_| state.spawn(|c| async move { c.refresh().await })
    };

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let query = search.get_untracked();
        state.spawn(move |c| async move { c.search_live(&query).await });
    };

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <select
                on:change=on_query
                class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm"
            >
                <option value="" selected=move || query.get().is_empty()>"All queries"</option>
                {move || ui.queries.get().into_iter().map(|q| {
                    let selected = q == query.get_untracked();
                    view! { <option value=q.clone() selected=selected>{q}</option> }
                }).collect_view()}
            </select>

            <select
                on:change=on_live
                prop:value=move || live.get()
                class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm"
            >
                <option value="" selected=move || live.get().is_empty()>"All"</option>
                <option value="true" selected=move || live.get() == "true">"Live"</option>
                <option value="false" selected=move || live.get() == "false">"Offline"</option>
            </select>

            <button
                on:click=on_refresh
                class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-700 text-gray-300 hover:bg-gray-600 transition-colors"
            >
                "Refresh"
            </button>

            <form on:submit=on_search class="flex items-center gap-2 ml-auto">
                <input
                    type="text"
                    placeholder="Search live now..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm"
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg text-sm font-medium bg-primary-600 hover:bg-primary-700 text-white transition-colors"
                >
                    "Search"
                </button>
            </form>
        </div>
    }
}

/// Option value for a live filter, as the backend spells it
fn live_value(live: LiveFilter) -> &'static str {
    live.as_param().unwrap_or("")
}
