//! State Management
//!
//! Reactive view state, the signal-backed renderer and the push-channel
//! driver.

pub mod global;
pub mod render;
pub mod websocket;

pub use global::{provide_global_state, use_controller, use_ui, Controller, GlobalState, UiState};
pub use render::SignalRenderer;
