//! Session management
//!
//! Tracks the signed-in account and its persisted copy.

pub mod manager;
pub mod state;

pub use manager::SessionManager;
pub use state::Session;
