//! Lawlens Server
//!
//! HTTP boundary of the legal-document analysis service. Hosts four
//! stateless document endpoints and a health check; all natural-language
//! work is delegated to the injected [`lawlens_llm::LlmGateway`].

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use lawlens_llm::LlmGateway;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Filesystem or socket error during startup
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Server error while handling requests
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server.
///
/// Initializes tracing, prepares the upload scratch directory, and serves
/// until the process is terminated.
pub async fn start_server(
    config: ServerConfig,
    gateway: Arc<dyn LlmGateway>,
) -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Lawlens server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.gateway.model);
    info!("Upload scratch dir: {}", config.upload_dir.display());

    std::fs::create_dir_all(&config.upload_dir)?;

    let bind_addr = config.bind_addr();
    let state = AppState {
        gateway,
        config: Arc::new(config),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
