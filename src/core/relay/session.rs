//! Relay session: bidirectional forwarding between one client and the
//! realtime API.
//!
//! A `RelaySession` owns exactly two connections: the accepted client
//! WebSocket and the upstream socket it opens during `start`. After the
//! upstream link is configured, two forwarding loops run concurrently until
//! either side terminates; the session then tears both connections down and
//! is discarded. Sessions are never pooled or reused, and nothing is shared
//! between sessions.
//!
//! Termination is coordinated through a single `CancellationToken` shared by
//! the two loops. Whichever loop stops first (disconnect, transport error,
//! malformed frame) cancels the token; the other observes the cancellation at
//! its next read boundary and exits. Neither loop ever touches the other's
//! connection.

use axum::extract::ws::{Message as WsMessage, WebSocket};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message as TungsteniteMessage;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::error::{RelayError, RelayResult};
use super::messages::ClientEvent;
use super::upstream::{self, UpstreamConfig, UpstreamSocket};

/// A single client conversation relayed to the realtime API.
pub struct RelaySession {
    /// Session ID used in logs
    id: Uuid,
    /// The accepted client connection
    client: WebSocket,
    /// Upstream connection parameters
    config: UpstreamConfig,
}

impl RelaySession {
    /// Create a session for an accepted client connection.
    pub fn new(client: WebSocket, config: UpstreamConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            config,
        }
    }

    /// Session ID used in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Run the session to completion.
    ///
    /// Connects and configures the upstream link, then forwards frames in
    /// both directions until either side terminates. Setup failures are
    /// reported to the client as a best-effort `error` event; forwarding
    /// failures end the session silently (the client observes the socket
    /// closing). Teardown always runs, and the upstream connection is closed
    /// exactly once no matter how the session ended.
    pub async fn start(self) {
        let Self { id, client, config } = self;
        let (mut client_tx, mut client_rx) = client.split();

        let mut upstream = match upstream::connect(&config).await {
            Ok(socket) => socket,
            Err(err) => {
                error!(session = %id, error = %err, "Failed to connect upstream");
                notify_client(&mut client_tx, &err).await;
                let _ = client_tx.close().await;
                info!(session = %id, "Session ended");
                return;
            }
        };

        if let Err(err) = upstream::configure(&mut upstream, &config).await {
            error!(session = %id, error = %err, "Failed to configure upstream session");
            notify_client(&mut client_tx, &err).await;
            let _ = upstream.close(None).await;
            let _ = client_tx.close().await;
            info!(session = %id, "Session ended");
            return;
        }

        let (mut upstream_tx, mut upstream_rx) = upstream.split();
        let active = CancellationToken::new();

        info!(session = %id, "Session relaying");
        let (client_leg, upstream_leg) = tokio::join!(
            forward_client_to_upstream(&mut client_rx, &mut upstream_tx, &active),
            forward_upstream_to_client(&mut upstream_rx, &mut client_tx, &active),
        );

        if let Err(err) = client_leg {
            error!(session = %id, error = %err, "Client-to-upstream forwarding stopped");
        }
        if let Err(err) = upstream_leg {
            error!(session = %id, error = %err, "Upstream-to-client forwarding stopped");
        }

        if let Err(err) = upstream_tx.close().await {
            debug!(session = %id, error = %err, "Upstream close during teardown");
        }
        let _ = client_tx.close().await;
        info!(session = %id, "Session ended");
    }
}

/// Forward client text frames to the upstream connection.
///
/// Frames must be valid JSON; the original text is forwarded verbatim once
/// parsing succeeds. A clean client disconnect completes the loop normally,
/// anything else that stops it is returned as an error. Always cancels the
/// shared token on exit.
async fn forward_client_to_upstream(
    client_rx: &mut SplitStream<WebSocket>,
    upstream_tx: &mut SplitSink<UpstreamSocket, TungsteniteMessage>,
    active: &CancellationToken,
) -> RelayResult<()> {
    let result = loop {
        let frame = tokio::select! {
            _ = active.cancelled() => break Ok(()),
            frame = client_rx.next() => frame,
        };

        match frame {
            Some(Ok(WsMessage::Text(text))) => {
                let event: serde_json::Value = match serde_json::from_str(text.as_str()) {
                    Ok(event) => event,
                    Err(e) => break Err(RelayError::Protocol(e.to_string())),
                };

                if let Err(e) = upstream_tx
                    .send(TungsteniteMessage::Text(text.as_str().into()))
                    .await
                {
                    break Err(RelayError::Transport(e.to_string()));
                }

                debug!(
                    event = event.get("type").and_then(|t| t.as_str()).unwrap_or("unknown"),
                    "Client -> upstream"
                );
            }
            Some(Ok(WsMessage::Close(_))) | None => {
                info!("Client disconnected");
                break Ok(());
            }
            // Control and binary frames are not part of the relayed protocol
            Some(Ok(_)) => {}
            Some(Err(e)) => break Err(RelayError::Transport(e.to_string())),
        }
    };

    active.cancel();
    result
}

/// Forward upstream text frames to the client.
///
/// Payloads pass through untouched; only the frame type is examined. Binary
/// and control frames are ignored. Always cancels the shared token on exit.
async fn forward_upstream_to_client(
    upstream_rx: &mut SplitStream<UpstreamSocket>,
    client_tx: &mut SplitSink<WebSocket, WsMessage>,
    active: &CancellationToken,
) -> RelayResult<()> {
    let result = loop {
        let frame = tokio::select! {
            _ = active.cancelled() => break Ok(()),
            frame = upstream_rx.next() => frame,
        };

        match frame {
            Some(Ok(TungsteniteMessage::Text(text))) => {
                debug!("Upstream -> client: {} bytes", text.len());
                if let Err(e) = client_tx.send(WsMessage::Text(text.as_str().into())).await {
                    break Err(RelayError::Transport(e.to_string()));
                }
            }
            Some(Ok(TungsteniteMessage::Close(_))) | None => {
                info!("Upstream closed the connection");
                break Ok(());
            }
            // Binary and control frames are not relayed
            Some(Ok(_)) => {}
            Some(Err(e)) => break Err(RelayError::Transport(e.to_string())),
        }
    };

    active.cancel();
    result
}

/// Best-effort error notification to the client.
///
/// Failures sending the notification are swallowed: the session is already
/// on its teardown path and the client will observe the socket closing.
async fn notify_client(client_tx: &mut SplitSink<WebSocket, WsMessage>, err: &RelayError) {
    let event = ClientEvent::Error {
        error: err.to_string(),
    };
    if let Ok(json) = serde_json::to_string(&event) {
        let _ = client_tx.send(WsMessage::Text(json.into())).await;
    }
}
