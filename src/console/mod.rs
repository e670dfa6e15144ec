//! Operator console
//!
//! Line-oriented command shell over the authentication service.

pub mod commands;
pub mod handler;
pub mod handlers;
pub mod parser;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handler::run_console;
pub use handlers::handle_command;
pub use parser::parse_command;
