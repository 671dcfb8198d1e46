//! Reconnect Backoff
//!
//! Bounded exponential backoff for the push channel. After the `n`-th
//! consecutive failure the next attempt waits `min(base * 2^n, cap)`; once
//! `max_attempts` reconnects have failed the channel gives up for good.

use serde::Serialize;
use std::time::Duration;

/// Backoff parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10_000),
            max_attempts: 5,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before reconnect number `attempt` (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay)
    }
}

/// Retry counter driven by channel open/close events
#[derive(Debug, Clone)]
pub struct Backoff {
    policy: ReconnectPolicy,
    attempt: u32,
}

impl Backoff {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self { policy, attempt: 0 }
    }

    pub fn policy(&self) -> &ReconnectPolicy {
        &self.policy
    }

    /// Reconnects scheduled since the channel was last open
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempt >= self.policy.max_attempts
    }

    /// Channel opened: start counting from zero again
    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// Delay before the next reconnect, or `None` once attempts are used up
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.is_exhausted() {
            return None;
        }
        self.attempt += 1;
        Some(self.policy.delay_for(self.attempt))
    }
}

/// What to do after the channel closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconnectDecision {
    /// Reconnect after `delay`
    Retry { attempt: u32, delay: Duration },
    /// Stop; a manual reload is required
    GiveUp { attempts: u32 },
}

/// Health of the push channel as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Reconnecting {
        attempt: u32,
        #[serde(with = "millis")]
        delay: Duration,
    },
    Disconnected,
    /// Reconnect attempts exhausted
    Failed,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn label(&self) -> String {
        match self {
            ConnectionStatus::Connecting => "Connecting".to_string(),
            ConnectionStatus::Connected => "Connected".to_string(),
            ConnectionStatus::Reconnecting { attempt, delay } => {
                format!("Reconnecting in {}s (attempt {})", delay.as_secs(), attempt)
            }
            ConnectionStatus::Disconnected => "Disconnected".to_string(),
            ConnectionStatus::Failed => "Connection lost".to_string(),
        }
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

/// Connection state machine: connected / disconnected plus the terminal
/// failed state once backoff is exhausted
#[derive(Debug, Clone)]
pub struct ChannelSupervisor {
    backoff: Backoff,
    status: ConnectionStatus,
}

impl ChannelSupervisor {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self {
            backoff: Backoff::new(policy),
            status: ConnectionStatus::Connecting,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status.is_connected()
    }

    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// Channel is open: healthy again, retry counter back to zero
    pub fn on_open(&mut self) {
        self.backoff.reset();
        self.status = ConnectionStatus::Connected;
    }

    /// Transport reported an error; the close that follows drives the retry
    pub fn on_error(&mut self) {
        if self.status != ConnectionStatus::Failed {
            self.status = ConnectionStatus::Disconnected;
        }
    }

    /// Channel closed: decide whether and when to reconnect
    pub fn on_close(&mut self) -> ReconnectDecision {
        match self.backoff.next_delay() {
            Some(delay) => {
                let attempt = self.backoff.attempt();
                self.status = ConnectionStatus::Reconnecting { attempt, delay };
                ReconnectDecision::Retry { attempt, delay }
            }
            None => {
                self.status = ConnectionStatus::Failed;
                ReconnectDecision::GiveUp {
                    attempts: self.backoff.attempt(),
                }
            }
        }
    }

    /// A reconnect attempt is starting
    pub fn on_connecting(&mut self) {
        if self.status != ConnectionStatus::Failed {
            self.status = ConnectionStatus::Connecting;
        }
    }
}

impl Default for ChannelSupervisor {
    fn default() -> Self {
        Self::new(ReconnectPolicy::default())
    }
}
