//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::channel::ReconnectPolicy;
use crate::dashboard::DashboardSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub reconnect: ReconnectConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Monitoring backend location
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Data loader settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    #[serde(default = "default_stats_hours")]
    pub stats_hours: u32,

    #[serde(default = "default_history_limit")]
    pub history_limit: u64,

    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_secs: u64,
}

fn default_page_size() -> u64 {
    20
}

fn default_stats_hours() -> u32 {
    24
}

fn default_history_limit() -> u64 {
    10
}

fn default_refresh_interval() -> u64 {
    120 // 2 minutes
}

fn default_heartbeat_interval() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            stats_hours: default_stats_hours(),
            history_limit: default_history_limit(),
            refresh_interval_secs: default_refresh_interval(),
            heartbeat_interval_secs: default_heartbeat_interval(),
        }
    }
}

/// Push-channel reconnect backoff
#[derive(Debug, Clone, Deserialize)]
pub struct ReconnectConfig {
    #[serde(default = "default_base_delay")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_base_delay() -> u64 {
    1000
}

fn default_max_delay() -> u64 {
    10_000
}

fn default_max_attempts() -> u32 {
    5
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay(),
            max_delay_ms: default_max_delay(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl From<&ReconnectConfig> for ReconnectPolicy {
    fn from(c: &ReconnectConfig) -> Self {
        ReconnectPolicy {
            base_delay: Duration::from_millis(c.base_delay_ms),
            max_delay: Duration::from_millis(c.max_delay_ms),
            max_attempts: c.max_attempts,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("livewatch").join("config.toml")),
            Some(PathBuf::from("/etc/livewatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LIVEWATCH_BASE_URL") {
            self.server.base_url = url;
        }

        if let Ok(size) = std::env::var("LIVEWATCH_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.dashboard.page_size = s;
            }
        }
        if let Ok(hours) = std::env::var("LIVEWATCH_STATS_HOURS") {
            if let Ok(h) = hours.parse() {
                self.dashboard.stats_hours = h;
            }
        }

        if let Ok(level) = std::env::var("LIVEWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LIVEWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Controller settings derived from this config
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            page_size: self.dashboard.page_size,
            stats_hours: self.dashboard.stats_hours,
            history_limit: self.dashboard.history_limit,
            refresh_interval: Duration::from_secs(self.dashboard.refresh_interval_secs.max(1)),
            heartbeat_interval: Duration::from_secs(self.dashboard.heartbeat_interval_secs.max(1)),
            reconnect: ReconnectPolicy::from(&self.reconnect),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Livewatch Configuration
#
# Environment variables override these settings:
# - LIVEWATCH_BASE_URL
# - LIVEWATCH_PAGE_SIZE
# - LIVEWATCH_STATS_HOURS
# - LIVEWATCH_LOG_LEVEL
# - LIVEWATCH_LOG_FORMAT

[server]
# Monitoring backend URL; the push channel lives at <base_url>/ws
base_url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# Rows per page in the streamer table
page_size = 20

# Statistics window (hours)
stats_hours = 24

# Rows in the recent scan list
history_limit = 10

# How often the streamer table reloads on its own (seconds)
refresh_interval_secs = 120

# Heartbeat interval on the push channel (seconds)
heartbeat_interval_secs = 30

[reconnect]
# Delay before reconnect n is min(base_delay_ms * 2^n, max_delay_ms)
base_delay_ms = 1000
max_delay_ms = 10000

# Give up after this many failed reconnects
max_attempts = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
