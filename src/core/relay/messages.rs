//! Wire message types originated by the relay.
//!
//! The relay is payload-agnostic: conversation traffic passes through
//! verbatim in both directions. The only messages it composes itself are the
//! one-time `session.update` event sent upstream after connecting, and the
//! `error` event sent to the client when a session fails during setup.

use serde::{Deserialize, Serialize};

/// Events sent by the relay to the upstream realtime API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpstreamEvent {
    /// Update session configuration
    #[serde(rename = "session.update")]
    SessionUpdate {
        /// Session configuration
        session: SessionConfig,
    },
}

/// Session configuration for the realtime API.
///
/// Every field is always populated; the relay sends a single complete
/// configuration per session and never patches it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Response modalities (text, audio)
    pub modalities: Vec<String>,

    /// System instructions for the assistant
    pub instructions: String,

    /// Voice for audio output
    pub voice: String,

    /// Input audio format
    pub input_audio_format: String,

    /// Output audio format
    pub output_audio_format: String,

    /// Input audio transcription configuration
    pub input_audio_transcription: InputAudioTranscription,

    /// Turn detection configuration
    pub turn_detection: TurnDetection,
}

/// Input audio transcription configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputAudioTranscription {
    /// Transcription model (e.g., "whisper-1")
    pub model: String,
}

/// Turn detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnDetection {
    /// Server-side VAD
    #[serde(rename = "server_vad")]
    ServerVad {
        /// Activation threshold (0.0 to 1.0)
        threshold: f32,
        /// Audio prefix padding in ms
        prefix_padding_ms: u32,
        /// Silence duration marking end of turn in ms
        silence_duration_ms: u32,
    },
}

/// Events sent by the relay to the downstream client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// Session-level failure notification
    #[serde(rename = "error")]
    Error {
        /// Human-readable error message
        error: String,
    },
}
