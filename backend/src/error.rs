//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! Every error renders as `{"error": "<message>"}`; the message is the raw
//! description of the underlying failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gemini::GenerationError;

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input is missing or invalid
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read (e.g., it exceeds the size limit)
    #[error("{message}")]
    Rejected {
        /// Status reported for the rejection
        status: StatusCode,
        /// Description of why the body was rejected
        message: String,
    },

    /// The generation call failed
    #[error("{0}")]
    Generation(#[from] GenerationError),

    /// Reading or writing chat history failed
    #[error("{0}")]
    Storage(#[from] sqlx::Error),

    /// Startup configuration is missing or invalid
    #[error("{0}")]
    Config(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::Generation(_)
            | AppError::Storage(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
