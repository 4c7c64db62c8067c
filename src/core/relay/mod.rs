//! Session relay module.
//!
//! One `RelaySession` is created per accepted client WebSocket. The session
//! opens its own upstream connection to the realtime API, injects the fixed
//! persona prompt via a one-time `session.update`, and pumps JSON text frames
//! verbatim in both directions until either side disconnects.
//!
//! # Architecture
//!
//! - `upstream` - outbound connection establishment and configuration
//! - `session` - the two forwarding loops and lifecycle/teardown control
//! - `messages` - the only messages the relay composes itself
//! - `error` - error taxonomy for setup and forwarding failures

mod error;
mod messages;
mod session;
mod upstream;

pub use error::{RelayError, RelayResult};
pub use messages::{
    ClientEvent, InputAudioTranscription, SessionConfig, TurnDetection, UpstreamEvent,
};
pub use session::RelaySession;
pub use upstream::{OPENAI_REALTIME_URL, UpstreamConfig, UpstreamSocket};
