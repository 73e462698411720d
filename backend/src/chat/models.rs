//! Chat data models
//!
//! Defines the persisted chat record and the reply returned for a new message.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reply text stored and returned when generation produces no content
pub const FALLBACK_RESPONSE: &str = "Sorry, I couldn't process that.";

/// One persisted user message / AI response exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ChatRecord {
    /// Row identifier assigned by SQLite, ascending in insertion order
    pub id: i64,
    /// Message submitted by the user
    pub user_message: String,
    /// Generated reply (or the fallback text)
    pub ai_response: String,
}

/// Response body for a successfully handled chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The message exactly as submitted
    pub user_message: String,
    /// Generated reply (or the fallback text)
    pub ai_response: String,
}

impl From<ChatRecord> for ChatReply {
    fn from(record: ChatRecord) -> Self {
        Self {
            user_message: record.user_message,
            ai_response: record.ai_response,
        }
    }
}
