//! Role catalogue
//!
//! The closed set of console roles together with the per-role tables used by
//! provisioning: employee-id prefix and password tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Master Admin")]
    MasterAdmin,
    #[serde(rename = "President/CEO")]
    PresidentCeo,
    #[serde(rename = "Vice President")]
    VicePresident,
    #[serde(rename = "IT Head")]
    ItHead,
    #[serde(rename = "HR")]
    Hr,
    Admin,
    Employee,
    Intern,
}

/// Password strength class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordTier {
    Executive,
    Staff,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::MasterAdmin,
        Role::PresidentCeo,
        Role::VicePresident,
        Role::ItHead,
        Role::Hr,
        Role::Admin,
        Role::Employee,
        Role::Intern,
    ];

    /// Roles allowed into the management views (employees, payroll, ...)
    pub const MANAGEMENT: [Role; 6] = [
        Role::MasterAdmin,
        Role::PresidentCeo,
        Role::VicePresident,
        Role::ItHead,
        Role::Hr,
        Role::Admin,
    ];

    /// Display name, identical to the persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::MasterAdmin => "Master Admin",
            Role::PresidentCeo => "President/CEO",
            Role::VicePresident => "Vice President",
            Role::ItHead => "IT Head",
            Role::Hr => "HR",
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Intern => "Intern",
        }
    }

    /// Prefix of employee identifiers allocated for this role.
    pub fn employee_id_prefix(self) -> &'static str {
        match self {
            Role::MasterAdmin => "ADMIN",
            Role::PresidentCeo => "CEO",
            Role::VicePresident => "VP",
            Role::ItHead => "IT",
            Role::Hr => "HR",
            Role::Admin => "ADM",
            Role::Intern => "INT",
            Role::Employee => "EMP",
        }
    }

    pub fn password_tier(self) -> PasswordTier {
        match self {
            Role::MasterAdmin | Role::PresidentCeo | Role::VicePresident | Role::ItHead => {
                PasswordTier::Executive
            }
            Role::Hr | Role::Admin | Role::Employee | Role::Intern => PasswordTier::Staff,
        }
    }

    pub fn is_master_admin(self) -> bool {
        self == Role::MasterAdmin
    }

    pub fn is_management(self) -> bool {
        Role::MANAGEMENT.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    /// Accepts the display name in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownRole(wanted.to_string()))
    }
}
