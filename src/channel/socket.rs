//! Push-Channel Socket
//!
//! tokio-tungstenite driver for the native dashboard. Connects, forwards text
//! frames to the controller, sends heartbeats while open, and reconnects with
//! the controller's backoff until it gives up.

use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::backoff::ReconnectDecision;
use super::messages::HEARTBEAT;
use crate::api::DashboardApi;
use crate::dashboard::Dashboard;
use crate::render::Renderer;

/// Reconnecting push-channel client
#[derive(Debug, Clone)]
pub struct PushChannel {
    url: String,
    heartbeat: Duration,
}

impl PushChannel {
    /// `url` is the full socket URL, e.g. "ws://localhost:8000/ws"
    pub fn new(url: impl Into<String>, heartbeat: Duration) -> Self {
        Self {
            url: url.into(),
            heartbeat,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Keep the channel up until reconnect attempts are exhausted.
    ///
    /// Only returns with [`ChannelError::ReconnectExhausted`]; every other
    /// failure is reported to the dashboard and retried.
    pub async fn run<A, R>(&self, dashboard: &Dashboard<A, R>) -> Result<(), ChannelError>
    where
        A: DashboardApi,
        R: Renderer,
    {
        loop {
            dashboard.channel_connecting();
            tracing::debug!(url = %self.url, "Connecting push channel");

            match connect_async(self.url.as_str()).await {
                Ok((stream, _response)) => {
                    dashboard.channel_opened();
                    if let Err(e) = self.pump(stream, dashboard).await {
                        dashboard.channel_error(&e.to_string());
                    }
                }
                Err(e) => dashboard.channel_error(&e.to_string()),
            }

            match dashboard.channel_closed() {
                ReconnectDecision::Retry { attempt, delay } => {
                    tracing::debug!(attempt, "Waiting {:?} before reconnect", delay);
                    tokio::time::sleep(delay).await;
                }
                ReconnectDecision::GiveUp { attempts } => {
                    return Err(ChannelError::ReconnectExhausted { attempts });
                }
            }
        }
    }

    /// Service one open connection until it closes
    async fn pump<S, A, R>(&self, stream: S, dashboard: &Dashboard<A, R>) -> Result<(), ChannelError>
    where
        S: futures_util::Stream<Item = Result<Message, WsError>>
            + futures_util::Sink<Message, Error = WsError>
            + Unpin,
        A: DashboardApi,
        R: Renderer,
    {
        let (mut write, mut read) = stream.split();

        let mut heartbeat = interval_at(Instant::now() + self.heartbeat, self.heartbeat);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    if dashboard.is_channel_open() {
                        write.send(Message::text(HEARTBEAT)).await?;
                        tracing::trace!("Sent heartbeat");
                    }
                }

                msg = read.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            dashboard.handle_message(text.as_str()).await;
                        }
                        Some(Ok(Message::Close(frame))) => {
                            tracing::info!(?frame, "Push channel closed by server");
                            break;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            tracing::info!("Push channel stream ended");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

type WsError = tokio_tungstenite::tungstenite::Error;

/// Push-channel driver errors
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("WebSocket error: {0}")]
    Socket(#[from] WsError),

    #[error("Gave up reconnecting after {attempts} attempts")]
    ReconnectExhausted { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{ConnectionStatus, ReconnectPolicy};
    use crate::dashboard::tests::{FakeApi, Recorder};
    use crate::dashboard::DashboardSettings;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use tokio_tungstenite::WebSocketStream;

    fn settings(max_attempts: u32) -> DashboardSettings {
        DashboardSettings {
            heartbeat_interval: Duration::from_millis(20),
            reconnect: ReconnectPolicy {
                base_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(5),
                max_attempts,
            },
            ..Default::default()
        }
    }

    /// Accept one socket on loopback and hand it to `handler`
    async fn serve_once<F, Fut>(handler: F) -> String
    where
        F: FnOnce(WebSocketStream<tokio::net::TcpStream>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (tcp, _) = listener.accept().await.unwrap();
            let ws = tokio_tungstenite::accept_async(tcp).await.unwrap();
            handler(ws).await;
        });
        format!("ws://{}/ws", addr)
    }

    #[tokio::test]
    async fn test_dispatches_frames_then_gives_up() {
        let url = serve_once(|mut ws| async move {
            ws.send(Message::text(r#"{"type": "scan_complete", "data": {}}"#))
                .await
                .unwrap();
            let _ = ws.close(None).await;
        })
        .await;

        let settings = settings(0);
        let dash = Dashboard::new(FakeApi::with_streamers(3), Recorder::default(), settings);
        let channel = PushChannel::new(url, settings.heartbeat_interval);

        let err = channel.run(&dash).await.unwrap_err();
        assert!(matches!(err, ChannelError::ReconnectExhausted { attempts: 0 }));
        assert_eq!(dash.api().count("streamers"), 1);
        assert_eq!(dash.api().count("statistics"), 1);

        let r = dash.renderer();
        assert_eq!(r.statuses[0], ConnectionStatus::Connecting);
        assert_eq!(r.statuses[1], ConnectionStatus::Connected);
        assert_eq!(*r.statuses.last().unwrap(), ConnectionStatus::Failed);
    }

    #[tokio::test]
    async fn test_sends_heartbeat_while_open() {
        let (tx, rx) = oneshot::channel();
        let url = serve_once(|mut ws| async move {
            while let Some(Ok(msg)) = ws.next().await {
                if let Message::Text(text) = msg {
                    if text.as_str() == HEARTBEAT {
                        let _ = tx.send(());
                        break;
                    }
                }
            }
            let _ = ws.close(None).await;
        })
        .await;

        let settings = settings(0);
        let dash = Dashboard::new(FakeApi::default(), Recorder::default(), settings);
        let channel = PushChannel::new(url, settings.heartbeat_interval);

        let _ = channel.run(&dash).await;
        assert!(rx.await.is_ok());
    }

    #[tokio::test]
    async fn test_refused_connection_retries_then_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let settings = settings(2);
        let dash = Dashboard::new(FakeApi::default(), Recorder::default(), settings);
        let channel = PushChannel::new(format!("ws://{}/ws", addr), settings.heartbeat_interval);

        let err = channel.run(&dash).await.unwrap_err();
        assert!(matches!(err, ChannelError::ReconnectExhausted { attempts: 2 }));

        let r = dash.renderer();
        let reconnects = r
            .statuses
            .iter()
            .filter(|s| matches!(s, ConnectionStatus::Reconnecting { .. }))
            .count();
        assert_eq!(reconnects, 2);
        assert!(!r.statuses.contains(&ConnectionStatus::Connected));
        assert_eq!(*r.statuses.last().unwrap(), ConnectionStatus::Failed);
    }
}
