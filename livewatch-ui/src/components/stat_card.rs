//! Stat Card Component
//!
//! Summary numbers from the statistics endpoint.

use leptos::*;
use leptos_router::*;

use crate::components::loading::CardSkeleton;
use crate::state::global::use_ui;

/// Single labelled number
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="text-3xl font-bold mt-2">{value}</div>
            {hint.map(|h| view! { <div class="text-gray-500 text-xs mt-1">{h}</div> })}
        </div>
    }
}

/// The four cards: total, live, recent scans, success rate
#[component]
pub fn StatCards() -> impl IntoView {
    let ui = use_ui();

    let field = move |f: fn(&livewatch::StatsView) -> String| {
        Signal::derive(move || ui.stats.with(|s| s.as_ref().map(f).unwrap_or_else(|| "-".to_string())))
    };

    view! {
        {move || {
            if ui.stats.with(|s| s.is_none()) {
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <CardSkeleton /><CardSkeleton /><CardSkeleton /><CardSkeleton />
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard label="Total streamers" value=field(|s| s.total_streamers.to_string()) />
                        <StatCard label="Live now" value=field(|s| s.live_streamers.to_string()) />
                        <StatCard
                            label="Recent scans"
                            value=field(|s| s.recent_scans.to_string())
                            hint="last 24 hours"
                        />
                        <StatCard label="Success rate" value=field(|s| format!("{}%", s.success_rate)) />
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Most frequently seen streamers, plus the failed scan count
#[component]
pub fn TopStreamers() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="space-y-2">
            {move || ui.stats.with(|stats| {
                let Some(stats) = stats else {
                    return view! { <p class="text-gray-400 text-sm">"No data"</p> }.into_view();
                };
                let failed = stats.failed_scans;
                let rows = stats.top_streamers.iter().map(|s| {
                    let href = format!("/streamers/{}", s.username);
                    view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <A href=href class="text-primary-400 hover:underline">{format!("@{}", s.username)}</A>
                            <span class="text-gray-400 text-sm">{format!("{} times", s.times_seen)}</span>
                        </div>
                    }
                }).collect_view();
                view! {
                    {rows}
                    {(failed > 0).then(|| view! {
                        <p class="text-red-400 text-sm mt-2">{format!("{} failed scans", failed)}</p>
                    })}
                }.into_view()
            })}
        </div>
    }
}
