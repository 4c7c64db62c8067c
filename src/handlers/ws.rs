//! Client WebSocket handler
//!
//! Upgrades the HTTP connection and hands the socket to a `RelaySession`,
//! which owns it for the rest of the conversation. One session per
//! connection; sessions are independent of each other.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use tracing::{info, warn};

use crate::core::relay::{ClientEvent, RelaySession, UpstreamConfig};
use crate::prompt::INTERVIEWER_PROMPT;
use crate::state::AppState;

/// Maximum WebSocket frame size (10 MB)
const MAX_WS_FRAME_SIZE: usize = 10 * 1024 * 1024;

/// Maximum WebSocket message size (10 MB)
const MAX_WS_MESSAGE_SIZE: usize = 10 * 1024 * 1024;

/// WebSocket endpoint handler for `GET /ws`.
///
/// Upgrades the HTTP connection to WebSocket and runs a relay session for
/// its entire lifetime.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.max_frame_size(MAX_WS_FRAME_SIZE)
        .max_message_size(MAX_WS_MESSAGE_SIZE)
        .on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an accepted client connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("New client connected");

    // Without a key every upstream connection is doomed; tell the client
    // instead of attempting one.
    let Some(api_key) = state.config.openai_api_key.clone() else {
        warn!("Rejecting session: OPENAI_API_KEY is not configured");
        reject(socket, "OPENAI_API_KEY is not configured").await;
        return;
    };

    let config = UpstreamConfig {
        url: state.config.realtime_url.clone(),
        api_key,
        model: state.config.realtime_model.clone(),
        voice: state.config.voice.clone(),
        instructions: INTERVIEWER_PROMPT.to_string(),
    };

    RelaySession::new(socket, config).start().await;
}

/// Send a structured error event and close the socket, best-effort.
async fn reject(mut socket: WebSocket, message: &str) {
    let event = ClientEvent::Error {
        error: message.to_string(),
    };
    if let Ok(json) = serde_json::to_string(&event) {
        let _ = socket.send(Message::Text(json.into())).await;
    }
    let _ = socket.send(Message::Close(None)).await;
}
