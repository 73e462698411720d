//! API module
//!
//! Contains the HTTP router and request handlers for the chat gateway

pub mod chat;
pub mod health;
pub mod middleware;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Largest request body accepted, in bytes (32 MiB)
pub const MAX_REQUEST_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat::submit_message))
        .route("/chats", get(chat::list_history))
        .route("/api/health", get(health::health_check))
        // axum's default 2 MB cap is too small for long prompts
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // Any origin may call the API
        .layer(CorsLayer::permissive())
        .with_state(state)
}
