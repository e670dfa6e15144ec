//! Employee identifier allocation
//!
//! Candidates are `<prefix>001`, `<prefix>002`, ... and the first one no
//! account holds wins, so a freed low number is handed out again.

use super::account::Account;
use super::role::Role;

pub fn format_employee_id(role: Role, counter: u32) -> String {
    format!("{}{:03}", role.employee_id_prefix(), counter)
}

/// Returns the lowest free employee id for `role` among `accounts`.
pub fn allocate_employee_id(role: Role, accounts: &[Account]) -> String {
    (1..)
        .map(|counter| format_employee_id(role, counter))
        .find(|candidate| !accounts.iter().any(|a| &a.employee_id == candidate))
        .unwrap_or_else(|| format_employee_id(role, u32::MAX))
}
