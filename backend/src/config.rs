//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The Gemini API key is the only required value.

use crate::error::AppError;
use std::env;

/// Default Gemini model used for every chat request
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini API root
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Persistence configuration
    pub persistence: PersistenceConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host to bind to: an IP literal or a resolvable hostname
    pub host: String,
}

/// Persistence configuration
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Path of the SQLite database file holding chat history
    pub database_path: String,
}

/// Gemini API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent with every generation request
    pub api_key: String,
    /// Model name (e.g., "gemini-1.5-flash")
    pub model: String,
    /// API base URL, overridable for tests and proxies
    pub api_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

// Keeps the API key out of startup logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    ///
    /// # Errors
    /// Returns `AppError::Config` if `GEMINI_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "Google Gemini API key is missing. Set GEMINI_API_KEY in the environment"
                        .to_string(),
                )
            })?;

        Ok(Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
                host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            },
            persistence: PersistenceConfig {
                database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "chat.db".to_string()),
            },
            gemini: GeminiConfig {
                api_key,
                model: lookup("GEMINI_MODEL")
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_base_url: lookup("GEMINI_API_BASE_URL")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string()),
                timeout_secs: lookup("GEMINI_TIMEOUT_SECS")
                    .and_then(|t| t.parse::<u64>().ok())
                    .filter(|t| *t > 0)
                    .unwrap_or(60),
            },
        })
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
