//! Module `commands`
//!
//! Console commands, their outcome status and the result returned to the
//! line loop.

/// A command parsed from one console line.
///
/// Commands that need arguments carry them; a known verb with missing
/// arguments parses as `Unknown`.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Login { employee_id: String, password: String },
    Logout,
    WhoAmI,
    /// Optional search text
    Users(Option<String>),
    /// Role filter (or "all") followed by optional search text
    Filter { role: String, search: Option<String> },
    /// Pipe-separated profile fields
    Create(String),
    Set { id: String, field: String, value: String },
    Delete(String),
    Open(String),
    Nav,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Name safe to log; arguments may hold a password.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Login { .. } => "LOGIN",
            Command::Logout => "LOGOUT",
            Command::WhoAmI => "WHOAMI",
            Command::Users(_) => "USERS",
            Command::Filter { .. } => "FILTER",
            Command::Create(_) => "CREATE",
            Command::Set { .. } => "SET",
            Command::Delete(_) => "DELETE",
            Command::Open(_) => "OPEN",
            Command::Nav => "NAV",
            Command::Stats => "STATS",
            Command::Help => "HELP",
            Command::Quit => "QUIT",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message.into()),
        }
    }
}

pub const CREATE_USAGE: &str = "CREATE name|role|department|email|phone|address|employmentType|contactName|contactRelationship|contactPhone|contactAddress";
pub const SET_USAGE: &str = "SET <id> <name|role|department|email|phone|address|employment|status> <value>";

pub const HELP_TEXT: &str = "\
Commands:
  LOGIN <employeeId> <password>   sign in
  LOGOUT                          sign out
  WHOAMI                          show the signed-in account
  USERS [search]                  list accounts
  FILTER <role|all> [search]      list accounts of one role
  CREATE <fields>                 provision an account (fields separated by |)
  SET <id> <field> <value>        update one field of an account
  DELETE <id>                     remove an account
  OPEN <path>                     open a console view
  NAV                             list the views you can open
  STATS                           account counts
  HELP                            this text
  QUIT                            leave the console";
