//! Legacy demo credentials
//!
//! Passwords of the seeded demo accounts. Provisioned accounts carry their
//! own generated password instead.

use std::collections::HashMap;
use std::sync::LazyLock;

pub(crate) static LEGACY_PASSWORDS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut creds = HashMap::new();
        creds.insert("ADMIN001", "admin123");
        creds.insert("EMP001", "admin123");
        creds.insert("EMP002", "hr123");
        creds.insert("EMP003", "emp123");
        creds
    });

pub fn legacy_password(employee_id: &str) -> Option<&'static str> {
    LEGACY_PASSWORDS.get(employee_id).copied()
}
