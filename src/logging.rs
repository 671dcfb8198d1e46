//! Logging
//!
//! tracing-subscriber setup for the native binary. Logs go to stderr so
//! table and JSON output on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match LogFormat::parse(&config.format) {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}

/// `[logging].format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    Json,
}

impl LogFormat {
    /// Anything but "json" falls back to pretty
    fn parse(format: &str) -> Self {
        if format.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// A bare level applies to this crate only; anything else is taken as a
/// full filter directive
fn default_directive(level: &str) -> String {
    let level = level.trim();
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => format!("livewatch={}", level),
        "" => "livewatch=info".to_string(),
        _ => level.to_string(),
    }
}
