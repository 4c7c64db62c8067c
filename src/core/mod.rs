pub mod relay;

// Re-export commonly used types for convenience
pub use relay::{
    ClientEvent, OPENAI_REALTIME_URL, RelayError, RelayResult, RelaySession, UpstreamConfig,
};
