//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod streamer;

pub use dashboard::Dashboard;
pub use streamer::StreamerDetail;
