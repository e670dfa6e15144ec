//! Authentication result types
//!
//! Defines result structures returned by provisioning operations.

use super::account::Account;

/// A freshly provisioned account and the password to hand to its owner.
#[derive(Debug, Clone)]
pub struct ProvisionResult {
    pub account: Account,
    pub password: String,
}

impl ProvisionResult {
    pub fn employee_id(&self) -> &str {
        &self.account.employee_id
    }
}
