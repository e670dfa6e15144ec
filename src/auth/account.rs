//! Account records
//!
//! The persisted identity record plus the input shapes used to create and
//! update it. Field names serialize in camelCase so the stored JSON keeps the
//! console's existing layout.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::role::Role;
use crate::error::{AuthError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Regular,
    Probationary,
    Contractual,
    #[serde(rename = "Part-time")]
    PartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// One system identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque internal identifier
    pub id: String,
    /// Human-facing `<prefix><NNN>` code
    pub employee_id: String,
    pub name: String,
    pub role: Role,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub employment_type: EmploymentType,
    pub status: AccountStatus,
    pub hire_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Password handed out at provisioning; seeded accounts have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_password: Option<String>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

/// Profile submitted to provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub role: Role,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub employment_type: EmploymentType,
    pub emergency_contact: EmergencyContact,
}

impl NewAccount {
    /// Every field is required; the email must at least look like one.
    pub fn validate(&self) -> Result<(), AuthError> {
        let required = [
            ("name", &self.name),
            ("department", &self.department),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("emergency contact name", &self.emergency_contact.name),
            (
                "emergency contact relationship",
                &self.emergency_contact.relationship,
            ),
            ("emergency contact phone", &self.emergency_contact.phone),
            ("emergency contact address", &self.emergency_contact.address),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AuthError::InvalidProfile(format!("{field} is required")));
        }

        if !self.email.contains('@') {
            return Err(AuthError::InvalidProfile(format!(
                "'{}' is not an email address",
                self.email
            )));
        }

        Ok(())
    }
}

/// Targeted field changes. `None` leaves the field untouched; identifiers
/// are never part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub employment_type: Option<EmploymentType>,
    pub status: Option<AccountStatus>,
}

impl AccountUpdate {
    pub fn apply_to(self, account: &mut Account) {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(role) = self.role {
            account.role = role;
        }
        if let Some(department) = self.department {
            account.department = department;
        }
        if let Some(email) = self.email {
            account.email = email;
        }
        if let Some(phone) = self.phone {
            account.phone = phone;
        }
        if let Some(address) = self.address {
            account.address = address;
        }
        if let Some(contact) = self.emergency_contact {
            account.emergency_contact = contact;
        }
        if let Some(employment_type) = self.employment_type {
            account.employment_type = employment_type;
        }
        if let Some(status) = self.status {
            account.status = status;
        }
    }
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::Regular,
        EmploymentType::Probationary,
        EmploymentType::Contractual,
        EmploymentType::PartTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::Regular => "Regular",
            EmploymentType::Probationary => "Probationary",
            EmploymentType::Contractual => "Contractual",
            EmploymentType::PartTime => "Part-time",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EmploymentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownEmploymentType(wanted.to_string()))
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => f.pad("Active"),
            AccountStatus::Inactive => f.pad("Inactive"),
        }
    }
}

impl FromStr for AccountStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> NewAccount {
        NewAccount {
            name: "Ana Reyes".into(),
            role: Role::Hr,
            department: "Human Resources".into(),
            email: "ana.reyes@afflatus.com".into(),
            phone: "+63 917 111 2222".into(),
            address: "12 Ayala Ave, Makati City".into(),
            employment_type: EmploymentType::Probationary,
            emergency_contact: EmergencyContact {
                name: "Luis Reyes".into(),
                relationship: "Brother".into(),
                phone: "+63 917 333 4444".into(),
                address: "12 Ayala Ave, Makati City".into(),
            },
        }
    }

    #[test]
    fn complete_profile_validates() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut p = profile();
        p.emergency_contact.phone = "   ".into();
        let err = p.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid profile: emergency contact phone is required"
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut p = profile();
        p.email = "ana.reyes".into();
        assert!(matches!(p.validate(), Err(AuthError::InvalidProfile(_))));
    }

    #[test]
    fn update_only_touches_given_fields() {
        let p = profile();
        let mut account = Account {
            id: "7".into(),
            employee_id: "HR001".into(),
            name: p.name.clone(),
            role: p.role,
            department: p.department.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            address: p.address.clone(),
            emergency_contact: p.emergency_contact.clone(),
            employment_type: p.employment_type,
            status: AccountStatus::Active,
            hire_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            created_by: Some("ADMIN001".into()),
            created_at: None,
            generated_password: None,
        };

        AccountUpdate {
            department: Some("Payroll".into()),
            status: Some(AccountStatus::Inactive),
            ..Default::default()
        }
        .apply_to(&mut account);

        assert_eq!(account.department, "Payroll");
        assert_eq!(account.status, AccountStatus::Inactive);
        assert_eq!(account.name, "Ana Reyes");
        assert_eq!(account.employee_id, "HR001");
    }

    #[test]
    fn stored_layout_is_camel_case() {
        let json = serde_json::to_value(profile()).unwrap();
        assert!(json.get("employmentType").is_some());
        assert_eq!(json["emergencyContact"]["relationship"], "Brother");
        assert_eq!(json["employmentType"], "Probationary");
    }

    #[test]
    fn part_time_keeps_its_hyphen() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::PartTime).unwrap(),
            "\"Part-time\""
        );
        assert_eq!(
            "part-time".parse::<EmploymentType>().unwrap(),
            EmploymentType::PartTime
        );
    }
}
