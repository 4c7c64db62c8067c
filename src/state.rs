//! Shared application state for axum handlers.

use crate::config::ServerConfig;

/// Application state shared across all routes.
///
/// Holds the immutable server configuration; per-session state lives inside
/// each `RelaySession` and is never shared across connections.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state from the loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
