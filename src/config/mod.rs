//! Configuration module for the relay server
//!
//! Configuration is read once from the process environment at startup
//! (a `.env` file is loaded in `main.rs` before this runs) and handed to
//! each relay session as plain constructor parameters. The relay core never
//! touches the environment itself.
//!
//! # Example
//! ```rust,no_run
//! use biographer_relay::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;

use thiserror::Error;

/// Default model requested from the realtime API.
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-10-01";

/// Default voice for audio output.
pub const DEFAULT_VOICE: &str = "alloy";

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `PORT` variable is present but not a valid TCP port
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Server configuration
///
/// Contains everything needed to run the relay server:
/// - Listen address (host, port)
/// - OpenAI credentials and realtime session parameters (model, voice)
/// - Upstream endpoint override (used by tests and self-hosted gateways)
/// - Security settings (CORS)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// OpenAI API key for the Realtime API
    pub openai_api_key: Option<String>,
    /// Realtime model identifier requested via the `model` query parameter
    pub realtime_model: String,
    /// Voice ID for audio output
    pub voice: String,
    /// Base WebSocket URL of the realtime endpoint (without query string)
    pub realtime_url: String,

    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
}

/// Zeroize the API key when the config is dropped so the secret does not
/// linger in memory after use.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.openai_api_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables (all optional):
    /// - `HOST` (default `127.0.0.1`)
    /// - `PORT` (default `8000`)
    /// - `OPENAI_API_KEY`
    /// - `REALTIME_MODEL` (default `gpt-4o-realtime-preview-2024-10-01`)
    /// - `VOICE` (default `alloy`)
    /// - `OPENAI_REALTIME_URL` (default `wss://api.openai.com/v1/realtime`)
    /// - `CORS_ALLOWED_ORIGINS` (default unset, same-origin only)
    ///
    /// A missing API key is not an error here: sessions report it to the
    /// client when a connection is attempted.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => 8000,
        };

        Ok(Self {
            host,
            port,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            realtime_model: env::var("REALTIME_MODEL")
                .unwrap_or_else(|_| DEFAULT_REALTIME_MODEL.to_string()),
            voice: env::var("VOICE").unwrap_or_else(|_| DEFAULT_VOICE.to_string()),
            realtime_url: env::var("OPENAI_REALTIME_URL")
                .unwrap_or_else(|_| crate::core::relay::OPENAI_REALTIME_URL.to_string()),
            cors_allowed_origins: non_empty_var("CORS_ALLOWED_ORIGINS"),
        })
    }

    /// Get the server address as a string in the format "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "HOST",
            "PORT",
            "OPENAI_API_KEY",
            "REALTIME_MODEL",
            "VOICE",
            "OPENAI_REALTIME_URL",
            "CORS_ALLOWED_ORIGINS",
        ] {
            unsafe { env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = ServerConfig::from_env().expect("defaults should load");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.address(), "127.0.0.1:8000");
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.realtime_model, DEFAULT_REALTIME_MODEL);
        assert_eq!(config.voice, DEFAULT_VOICE);
        assert_eq!(config.realtime_url, "wss://api.openai.com/v1/realtime");
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("HOST", "0.0.0.0");
            env::set_var("PORT", "9100");
            env::set_var("OPENAI_API_KEY", "sk-test");
            env::set_var("REALTIME_MODEL", "gpt-4o-mini-realtime-preview");
            env::set_var("VOICE", "shimmer");
            env::set_var("OPENAI_REALTIME_URL", "ws://127.0.0.1:9000");
        }

        let config = ServerConfig::from_env().expect("overrides should load");
        assert_eq!(config.address(), "0.0.0.0:9100");
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.realtime_model, "gpt-4o-mini-realtime-preview");
        assert_eq!(config.voice, "shimmer");
        assert_eq!(config.realtime_url, "ws://127.0.0.1:9000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        unsafe { env::set_var("PORT", "not-a-port") };

        let err = ServerConfig::from_env().expect_err("invalid port must fail");
        assert!(err.to_string().contains("not-a-port"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_treated_as_unset() {
        clear_env();
        unsafe { env::set_var("OPENAI_API_KEY", "   ") };

        let config = ServerConfig::from_env().expect("config should load");
        assert!(config.openai_api_key.is_none());

        clear_env();
    }
}
