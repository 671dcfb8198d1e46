//! Scan List Component
//!
//! Most recent backend scans.

use leptos::*;

use livewatch::format::format_date;

use crate::components::loading::ListSkeleton;
use crate::state::global::use_ui;

#[component]
pub fn ScanList() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="space-y-2">
            {move || {
                let scans = ui.scans.get();
                if scans.is_empty() && ui.loading() {
                    return view! { <ListSkeleton /> }.into_view();
                }
                if scans.is_empty() {
                    return view! { <p class="text-gray-400 text-sm">"No scans yet"</p> }.into_view();
                }
                scans.into_iter().map(|scan| {
                    let (icon, detail) = if scan.success {
                        ("✓", format!("{} streamers found", scan.streamers_found))
                    } else {
                        ("✕", scan.error_message.clone().unwrap_or_else(|| "Scan failed".to_string()))
                    };
                    let detail_class = if scan.success { "text-gray-400" } else { "text-red-400" };
                    view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <div class="flex items-center space-x-3">
                                <span>{icon}</span>
                                <div>
                                    <span class="font-medium">{scan.query.clone()}</span>
                                    <span class="text-gray-400 text-sm ml-2">{format_date(scan.timestamp.as_deref())}</span>
                                </div>
                            </div>
                            <span class=format!("text-sm {}", detail_class)>{detail}</span>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
