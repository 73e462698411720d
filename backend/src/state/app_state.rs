//! Application state shared by every request handler
//!
//! Holds the chat store and the text generator behind Arcs.

use crate::chat::ChatDb;
use crate::gemini::TextGenerator;
use std::sync::Arc;

/// Dependencies injected into the HTTP handlers
///
/// Cloned per request; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Chat history store
    pub chat_db: Arc<ChatDb>,
    /// Generator used to answer chat messages
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Create application state from its dependencies
    pub fn new(chat_db: ChatDb, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            chat_db: Arc::new(chat_db),
            generator,
        }
    }
}
