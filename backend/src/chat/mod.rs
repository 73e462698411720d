//! Chat module
//!
//! Handles chat history storage using a SQLite database.

pub mod db;
pub mod models;

pub use db::ChatDb;
pub use models::{ChatRecord, ChatReply, FALLBACK_RESPONSE};
