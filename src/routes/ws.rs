//! Relay WebSocket route configuration
//!
//! # Endpoint
//!
//! `GET /ws` - WebSocket upgrade for a relay session
//!
//! # Protocol
//!
//! After the upgrade, the relay connects to the realtime API, sends its
//! session configuration, and then forwards JSON text frames verbatim in
//! both directions. The payload schema is the provider's realtime event
//! schema; the relay does not interpret it. On a setup failure the client
//! receives a single `{"type": "error", "error": "..."}` event before the
//! socket closes.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::ws::ws_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the relay WebSocket router
pub fn create_ws_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
}
