//! Upstream connector for the realtime API.
//!
//! Opens the outbound WebSocket with the required authentication headers and
//! sends the one-time session configuration. Connection establishment and
//! configuration are the only operations here; frame forwarding lives in
//! [`super::session`].

use futures_util::SinkExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::info;

use super::error::{RelayError, RelayResult};
use super::messages::{InputAudioTranscription, SessionConfig, TurnDetection, UpstreamEvent};

/// OpenAI Realtime API WebSocket endpoint.
pub const OPENAI_REALTIME_URL: &str = "wss://api.openai.com/v1/realtime";

/// The established upstream connection.
pub type UpstreamSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Parameters for one upstream session, resolved at process start and passed
/// into each relay session by the handler.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base WebSocket URL of the realtime endpoint (without query string)
    pub url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Model identifier appended as the `model` query parameter
    pub model: String,
    /// Voice for audio output
    pub voice: String,
    /// System instructions for the assistant
    pub instructions: String,
}

impl UpstreamConfig {
    /// Build the WebSocket URL with the model parameter.
    pub fn ws_url(&self) -> String {
        format!("{}?model={}", self.url, self.model)
    }
}

/// Build the handshake request with authentication headers.
fn build_request(config: &UpstreamConfig) -> RelayResult<http::Request<()>> {
    let ws_url = config.ws_url();

    let parsed = url::Url::parse(&ws_url)
        .map_err(|e| RelayError::ConnectionFailed(format!("invalid upstream URL: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| RelayError::ConnectionFailed("upstream URL has no host".to_string()))?;
    let host = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    http::Request::builder()
        .uri(&ws_url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("OpenAI-Beta", "realtime=v1")
        .header(
            "Sec-WebSocket-Key",
            tungstenite::handshake::client::generate_key(),
        )
        .header("Sec-WebSocket-Version", "13")
        .header("Connection", "Upgrade")
        .header("Upgrade", "websocket")
        .header("Host", host)
        .body(())
        .map_err(|e| RelayError::ConnectionFailed(e.to_string()))
}

/// Establish the outbound WebSocket connection.
///
/// On failure the partially-opened transport is dropped before the error is
/// returned; nothing is left for the caller to release.
pub async fn connect(config: &UpstreamConfig) -> RelayResult<UpstreamSocket> {
    let request = build_request(config)?;

    let (socket, _response) = tokio_tungstenite::connect_async(request)
        .await
        .map_err(|e| RelayError::ConnectionFailed(e.to_string()))?;

    info!("Connected to realtime API at {}", config.url);
    Ok(socket)
}

/// Send the one-time session configuration.
///
/// Sent exactly once per session, before any forwarding begins. Not retried:
/// a failure here is a session-level error.
pub async fn configure(socket: &mut UpstreamSocket, config: &UpstreamConfig) -> RelayResult<()> {
    let event = UpstreamEvent::SessionUpdate {
        session: SessionConfig {
            modalities: vec!["text".to_string(), "audio".to_string()],
            instructions: config.instructions.clone(),
            voice: config.voice.clone(),
            input_audio_format: "pcm16".to_string(),
            output_audio_format: "pcm16".to_string(),
            input_audio_transcription: InputAudioTranscription {
                model: "whisper-1".to_string(),
            },
            turn_detection: TurnDetection::ServerVad {
                threshold: 0.5,
                prefix_padding_ms: 300,
                silence_duration_ms: 500,
            },
        },
    };

    let json = serde_json::to_string(&event).map_err(|e| RelayError::Protocol(e.to_string()))?;
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    info!("Session configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> UpstreamConfig {
        UpstreamConfig {
            url: OPENAI_REALTIME_URL.to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o-realtime-preview-2024-10-01".to_string(),
            voice: "alloy".to_string(),
            instructions: "Be brief".to_string(),
        }
    }

    #[test]
    fn test_ws_url_includes_model() {
        let config = test_config();
        assert_eq!(
            config.ws_url(),
            "wss://api.openai.com/v1/realtime?model=gpt-4o-realtime-preview-2024-10-01"
        );
    }

    #[test]
    fn test_request_carries_auth_headers() {
        let request = build_request(&test_config()).expect("request should build");

        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer sk-test"
        );
        assert_eq!(request.headers().get("OpenAI-Beta").unwrap(), "realtime=v1");
        assert_eq!(request.headers().get("Host").unwrap(), "api.openai.com");
        assert_eq!(request.headers().get("Upgrade").unwrap(), "websocket");
    }

    #[test]
    fn test_request_host_keeps_explicit_port() {
        let config = UpstreamConfig {
            url: "ws://127.0.0.1:9000".to_string(),
            ..test_config()
        };
        let request = build_request(&config).expect("request should build");
        assert_eq!(request.headers().get("Host").unwrap(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_url_is_a_connection_error() {
        let config = UpstreamConfig {
            url: "not a url".to_string(),
            ..test_config()
        };
        match build_request(&config) {
            Err(RelayError::ConnectionFailed(_)) => {}
            other => panic!("Expected ConnectionFailed, got {other:?}"),
        }
    }
}
