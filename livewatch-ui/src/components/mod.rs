//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod filters;
pub mod loading;
pub mod scan_list;
pub mod stat_card;
pub mod streamer_table;
pub mod toast;

pub use nav::Nav;
pub use chart::{QueryChart, ScanChart};
pub use filters::Filters;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use scan_list::ScanList;
pub use stat_card::{StatCard, StatCards, TopStreamers};
pub use streamer_table::StreamerTable;
pub use toast::Toasts;
