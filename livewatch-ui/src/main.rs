//! Livewatch Dashboard
//!
//! Live-stream monitor dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Streamer table with query and live-status filters and pagination
//! - Statistics cards, query-share and scan-history charts
//! - Push-channel live updates with bounded reconnect
//! - Streamer detail pages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The shared `livewatch` controller does the loading and state
//! keeping; this crate supplies the fetch transport, the socket driver and a
//! renderer that writes into Leptos signals.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
