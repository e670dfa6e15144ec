//! First-run demo accounts

use chrono::NaiveDate;

use crate::auth::{Account, AccountStatus, EmergencyContact, EmploymentType, Role};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn contact(name: &str, relationship: &str, phone: &str, address: &str) -> EmergencyContact {
    EmergencyContact {
        name: name.to_string(),
        relationship: relationship.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    }
}

/// One Master Admin and three staff accounts. Their passwords live in the
/// legacy credential table.
pub fn seed_accounts() -> Vec<Account> {
    let main_office = "Afflatus Realty Inc. Main Office";

    vec![
        Account {
            id: "0".into(),
            employee_id: "ADMIN001".into(),
            name: "System Administrator".into(),
            role: Role::MasterAdmin,
            department: "Information Technology".into(),
            email: "admin@afflatus.com".into(),
            phone: "+63 917 000 0000".into(),
            address: main_office.into(),
            emergency_contact: contact(
                "Emergency Contact",
                "Company",
                "+63 917 000 0001",
                main_office,
            ),
            employment_type: EmploymentType::Regular,
            status: AccountStatus::Active,
            hire_date: date(2020, 1, 1),
            created_by: None,
            created_at: date(2020, 1, 1).and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            generated_password: None,
        },
        Account {
            id: "1".into(),
            employee_id: "EMP001".into(),
            name: "Juan Carlos Dela Cruz".into(),
            role: Role::PresidentCeo,
            department: "Executive".into(),
            email: "juan.delacruz@afflatus.com".into(),
            phone: "+63 917 123 4567".into(),
            address: "123 Makati Ave, Makati City, Metro Manila".into(),
            emergency_contact: contact(
                "Maria Dela Cruz",
                "Spouse",
                "+63 917 765 4321",
                "123 Makati Ave, Makati City, Metro Manila",
            ),
            employment_type: EmploymentType::Regular,
            status: AccountStatus::Active,
            hire_date: date(2020, 1, 15),
            created_by: None,
            created_at: None,
            generated_password: None,
        },
        Account {
            id: "2".into(),
            employee_id: "EMP002".into(),
            name: "Maria Santos Rodriguez".into(),
            role: Role::Hr,
            department: "Human Resources".into(),
            email: "maria.santos@afflatus.com".into(),
            phone: "+63 917 234 5678".into(),
            address: "456 BGC Blvd, Taguig City, Metro Manila".into(),
            emergency_contact: contact(
                "Jose Rodriguez",
                "Spouse",
                "+63 917 876 5432",
                "456 BGC Blvd, Taguig City, Metro Manila",
            ),
            employment_type: EmploymentType::Regular,
            status: AccountStatus::Active,
            hire_date: date(2020, 3, 1),
            created_by: None,
            created_at: None,
            generated_password: None,
        },
        Account {
            id: "3".into(),
            employee_id: "EMP003".into(),
            name: "Roberto Miguel Fernandez".into(),
            role: Role::Employee,
            department: "Sales".into(),
            email: "roberto.fernandez@afflatus.com".into(),
            phone: "+63 917 345 6789".into(),
            address: "789 Ortigas Ave, Pasig City, Metro Manila".into(),
            emergency_contact: contact(
                "Carmen Fernandez",
                "Mother",
                "+63 917 987 6543",
                "789 Ortigas Ave, Pasig City, Metro Manila",
            ),
            employment_type: EmploymentType::Regular,
            status: AccountStatus::Active,
            hire_date: date(2021, 6, 15),
            created_by: None,
            created_at: None,
            generated_password: None,
        },
    ]
}
