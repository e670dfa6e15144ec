//! Module `state`
//!
//! Defines the `Session` held by a running console: either nobody is signed
//! in or exactly one account is.

use crate::auth::{Account, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(Account),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// Returns the signed-in account, if any.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Authenticated(account) => Some(account),
            Session::Unauthenticated => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.account().map(|a| a.role)
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.account().map(|a| a.employee_id.as_str())
    }
}
