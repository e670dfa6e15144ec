pub mod access;
pub mod auth;
pub mod config;
pub mod console;
pub mod directory;
pub mod error;
pub mod session;
pub mod storage;
pub mod utils;

pub use auth::AuthService;
pub use config::AppConfig;
