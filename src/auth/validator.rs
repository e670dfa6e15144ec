//! Credential validator
//!
//! Checks an employee id + password pair against the account list. A
//! password is accepted when it matches the legacy demo table or the
//! account's generated password.

use super::account::Account;
use super::credentials::legacy_password;
use crate::error::AuthError;

const MAX_INPUT_LENGTH: usize = 128;

/// Performs basic input sanitation on login fields.
fn is_valid_input(input: &str) -> bool {
    !input.trim().is_empty() && input.len() <= MAX_INPUT_LENGTH && !input.contains(['\r', '\n', '\0'])
}

/// Returns the matching account, or `InvalidCredentials` for any failure.
pub fn validate_credentials<'a>(
    accounts: &'a [Account],
    employee_id: &str,
    password: &str,
) -> Result<&'a Account, AuthError> {
    if !is_valid_input(employee_id) || !is_valid_input(password) {
        return Err(AuthError::InvalidCredentials);
    }

    let account = accounts
        .iter()
        .find(|a| a.employee_id == employee_id)
        .ok_or(AuthError::InvalidCredentials)?;

    let legacy_match = legacy_password(employee_id) == Some(password);
    let generated_match = account.generated_password.as_deref() == Some(password);

    if legacy_match || generated_match {
        Ok(account)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_accounts;

    #[test]
    fn seeded_accounts_use_the_legacy_table() {
        let accounts = seed_accounts();
        let admin = validate_credentials(&accounts, "ADMIN001", "admin123").unwrap();
        assert_eq!(admin.name, "System Administrator");
        assert!(validate_credentials(&accounts, "EMP002", "hr123").is_ok());
        assert!(validate_credentials(&accounts, "EMP003", "emp123").is_ok());
    }

    #[test]
    fn generated_password_is_accepted() {
        let mut accounts = seed_accounts();
        accounts[3].generated_password = Some("aB3dE9".into());
        assert!(validate_credentials(&accounts, "EMP003", "aB3dE9").is_ok());
        // the legacy password keeps working alongside it
        assert!(validate_credentials(&accounts, "EMP003", "emp123").is_ok());
    }

    #[test]
    fn unknown_id_and_wrong_password_are_indistinguishable() {
        let accounts = seed_accounts();
        let wrong_password = validate_credentials(&accounts, "EMP002", "nope").unwrap_err();
        let unknown_id = validate_credentials(&accounts, "EMP999", "hr123").unwrap_err();
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_id, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_id.to_string());
    }

    #[test]
    fn legacy_password_of_another_account_is_rejected() {
        let accounts = seed_accounts();
        assert!(validate_credentials(&accounts, "EMP003", "hr123").is_err());
    }

    #[test]
    fn legacy_entry_without_an_account_is_rejected() {
        let accounts: Vec<Account> = seed_accounts().into_iter().skip(1).collect();
        assert!(validate_credentials(&accounts, "ADMIN001", "admin123").is_err());
    }

    #[test]
    fn malformed_input_fails_the_same_way() {
        let accounts = seed_accounts();
        let err = validate_credentials(&accounts, "EMP002\r\n", "hr123").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(validate_credentials(&accounts, "", "").is_err());
    }
}
