//! Shared handler state
//!
//! Carries the injected chat store and text generator.

pub mod app_state;

pub use app_state::AppState;
