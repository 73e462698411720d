//! Chat Gateway Backend
//!
//! A REST API that forwards chat messages to Gemini and keeps their history.

use chat_gateway_backend::{
    api,
    chat::ChatDb,
    config::Config,
    gemini::{GeminiClient, TextGenerator},
    state::AppState,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration; a missing API key stops startup here
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let chat_db = ChatDb::new(&config.persistence.database_path).await?;
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config.gemini)?);
    info!(model = %config.gemini.model, "Gemini client ready");

    let app = api::router(AppState::new(chat_db, generator));

    // Bind to address from config; hostnames such as "localhost" are resolved
    let server_addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", server_addr, e))?;
    let addr = listener.local_addr()?;

    info!("🚀 Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
