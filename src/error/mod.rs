//! Error handling
//!
//! Defines error types and handling for the HR console.

pub mod handlers;
pub mod types;

pub use types::*;
