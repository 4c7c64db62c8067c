use std::sync::Arc;

use tracing::info;

use axum::Router;
use clap::Parser;
use http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use anyhow::anyhow;

use biographer_relay::{ServerConfig, routes, state::AppState};

/// Biographer Relay - WebSocket bridge to the OpenAI Realtime API
#[derive(Parser, Debug)]
#[command(name = "biographer-relay")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Listen host (overrides HOST)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    if config.openai_api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY is not set; relay sessions will be rejected until it is configured"
        );
    }

    let address = config.address();
    let cors_origins = config.cors_allowed_origins.clone();

    // Create application state
    let app_state = Arc::new(AppState::new(config));

    // Configure CORS
    let cors_layer = if let Some(ref origins) = cors_origins {
        if origins == "*" {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(false)
        } else {
            // Parse comma-separated origins
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(true)
        }
    } else {
        // No CORS configured - same-origin only. Set CORS_ALLOWED_ORIGINS to
        // enable cross-origin access for browser frontends.
        info!(
            "CORS not configured, defaulting to same-origin only. \
             Set CORS_ALLOWED_ORIGINS to enable cross-origin access."
        );
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .allow_credentials(false)
    };

    // Security headers
    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ));

    // Combine status routes with the relay WebSocket endpoint
    let app: Router = routes::api::create_api_router()
        .merge(routes::ws::create_ws_router())
        .with_state(app_state)
        .layer(cors_layer)
        .layer(security_headers);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow!("Failed to bind {}: {}", address, e))?;

    info!("Server listening on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
