//! Account directory
//!
//! Search, role filtering and head counts for the user-management view.

use std::str::FromStr;

use crate::auth::{Account, Role};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

/// Filter keyword selecting every role
pub const ALL_ROLES: &str = "all";

impl FromStr for RoleFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_ROLES) {
            Ok(RoleFilter::All)
        } else {
            s.parse().map(RoleFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub management: usize,
}

/// Case-insensitive match of `search` against name, employee id or email.
pub fn matches_search(account: &Account, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty()
        || account.name.to_lowercase().contains(&needle)
        || account.employee_id.to_lowercase().contains(&needle)
        || account.email.to_lowercase().contains(&needle)
}

pub fn filter_accounts<'a>(
    accounts: &'a [Account],
    search: &str,
    role: RoleFilter,
) -> Vec<&'a Account> {
    accounts
        .iter()
        .filter(|account| matches_search(account, search))
        .filter(|account| match role {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => account.role == wanted,
        })
        .collect()
}

pub fn stats(accounts: &[Account]) -> DirectoryStats {
    DirectoryStats {
        total: accounts.len(),
        active: accounts.iter().filter(|a| a.is_active()).count(),
        management: accounts.iter().filter(|a| a.role.is_management()).count(),
    }
}
