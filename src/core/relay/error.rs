//! Error types for relay sessions.

use thiserror::Error;

/// Errors that can occur while establishing or running a relay session.
///
/// A clean client disconnect is not represented here: it is the normal way a
/// conversation ends and surfaces as successful pump completion.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream connection could not be established (network error,
    /// handshake failure, or auth rejection)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A frame could not be parsed as the expected JSON payload
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A read or write on an established connection failed mid-session
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
