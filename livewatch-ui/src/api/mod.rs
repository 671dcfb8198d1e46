//! API Client
//!
//! HTTP communication with the monitoring backend.

pub mod client;

pub use client::{get_api_base, GlooApi};
