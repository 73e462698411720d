//! Gemini module
//!
//! Text generation against the Gemini API. Handlers depend on the
//! [`TextGenerator`] trait rather than on [`GeminiClient`] directly, so the
//! generator can be swapped out in tests.

pub mod client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;

/// Errors that can occur during a generation call
///
/// Display text is the raw upstream description; it is returned to HTTP
/// clients unchanged.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The client was configured without an API key
    #[error("API key is empty")]
    MissingApiKey,

    /// The HTTP request could not be sent or its body could not be read
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message reported by the API
        message: String,
    },

    /// The API answered with a body that is not a valid response
    #[error("{0}")]
    Decode(String),
}

/// Something that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt`
    ///
    /// Returns `Ok(None)` when the call succeeded but produced no usable text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
