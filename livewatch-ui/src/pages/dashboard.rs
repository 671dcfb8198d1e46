//! Dashboard Page
//!
//! Stat cards, charts, the filtered streamer table and recent scans.

use leptos::*;

use crate::components::{Filters, QueryChart, ScanChart, ScanList, StatCards, StreamerTable, TopStreamers};
use crate::state::global::use_controller;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_controller();

    // Initial load on mount
    state.spawn(|c| async move { c.load_initial().await });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Live Monitor"</h1>
                <p class="text-gray-400 mt-1">"Streamers found by the scheduled live searches"</p>
            </div>

            <section>
                <StatCards />
            </section>

            // Charts
            <div class="grid md:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Streamers by Query"</h2>
                    <QueryChart />
                </section>
                <section class="bg-gray-800 rounded-xl p-6 md:col-span-2">
                    <h2 class="text-xl font-semibold mb-4">"Scan History"</h2>
                    <ScanChart />
                </section>
            </div>

            // Streamer table
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Streamers"</h2>
                <Filters />
                <StreamerTable />
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Scans"</h2>
                    <ScanList />
                </section>
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Most Seen"</h2>
                    <TopStreamers />
                </section>
            </div>
        </div>
    }
}
