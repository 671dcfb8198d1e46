//! Toast Notification Component
//!
//! Stack of transient messages raised by the controller.

use leptos::*;

use livewatch::ToastLevel;

use crate::state::global::use_ui;

/// Toast notification container
#[component]
pub fn Toasts() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            <For
                each=move || ui.toasts.get()
                key=|(id, _)| *id
                children=move |(_, toast)| view! {
                    <ToastMessage message=toast.message level=toast.level />
                }
            />
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    level: ToastLevel,
) -> impl IntoView {
    let bg_class = match level {
        ToastLevel::Success => "bg-green-600",
        ToastLevel::Info => "bg-blue-600",
        ToastLevel::Warning => "bg-yellow-600",
        ToastLevel::Error => "bg-red-600",
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{level.icon()}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
