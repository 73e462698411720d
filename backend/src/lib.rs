//! Chat Gateway Backend Library
//!
//! Forwards chat messages to the Gemini API, stores each exchange in SQLite
//! and serves the stored history. The binary lives in `src/main.rs`; this
//! library exposes the modules for integration tests.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod gemini;
pub mod state;
