//! Authentication service
//!
//! Owns the account list, the credential store and the session, and exposes
//! login, provisioning and account maintenance to the console.

use chrono::Utc;
use log::{info, warn};
use std::time::Duration;
use uuid::Uuid;

use super::account::{Account, AccountStatus, AccountUpdate, NewAccount};
use super::employee_id::allocate_employee_id;
use super::password::generate_password;
use super::results::ProvisionResult;
use super::validator::validate_credentials;
use crate::access::gate::{RequiredRoles, can_access, ensure_not_self, require_master_admin};
use crate::config::{AuthConfig, StorageConfig};
use crate::error::{AppError, AuthError, StorageError};
use crate::session::{Session, SessionManager};
use crate::storage::{CredentialStore, KeyValueStore};

pub struct AuthService<S> {
    config: AuthConfig,
    credentials: CredentialStore<S>,
    sessions: SessionManager<S>,
    accounts: Vec<Account>,
}

/// Simulated round trip; zero skips the timer entirely.
async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl<S: KeyValueStore + Clone> AuthService<S> {
    /// Loads (or seeds) the accounts and restores a still-valid session.
    pub fn open(backend: S, storage: &StorageConfig, config: AuthConfig) -> Result<Self, StorageError> {
        let credentials = CredentialStore::new(backend.clone(), &storage.users_key);
        let accounts = credentials.load()?;

        let mut sessions = SessionManager::new(backend, &storage.session_key);
        sessions.restore(&accounts)?;

        Ok(Self {
            config,
            credentials,
            sessions,
            accounts,
        })
    }
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn session(&self) -> &Session {
        self.sessions.current()
    }

    pub fn current_user(&self) -> Option<&Account> {
        self.sessions.current().account()
    }

    pub fn can_access(&self, required: RequiredRoles<'_>) -> bool {
        can_access(required, self.sessions.current())
    }

    /// Verifies the pair and makes the matching account the session.
    pub async fn login(&mut self, employee_id: &str, password: &str) -> Result<Account, AppError> {
        pause(self.config.login_delay()).await;

        let account = match validate_credentials(&self.accounts, employee_id, password) {
            Ok(account) => account.clone(),
            Err(e) => {
                warn!("Failed login attempt for {}", employee_id.trim());
                return Err(e.into());
            }
        };

        self.sessions.begin(account.clone())?;
        info!("{} ({}) signed in", account.employee_id, account.role);
        Ok(account)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        if let Some(employee_id) = self.sessions.current().employee_id() {
            info!("{} signed out", employee_id);
        }
        self.sessions.end()?;
        Ok(())
    }

    /// Master Admin only. Every account, in storage order.
    pub fn get_all_users(&self) -> Result<&[Account], AuthError> {
        require_master_admin(self.sessions.current(), "view all users")?;
        Ok(&self.accounts)
    }

    /// Master Admin only. Allocates an employee id, generates a password and
    /// persists the new account.
    pub async fn create_user(&mut self, profile: NewAccount) -> Result<ProvisionResult, AppError> {
        let creator = require_master_admin(self.sessions.current(), "create users")?
            .employee_id
            .clone();
        profile.validate()?;

        pause(self.config.mutation_delay()).await;

        let employee_id = allocate_employee_id(profile.role, &self.accounts);
        let password = generate_password(profile.role);
        let now = Utc::now();

        let account = Account {
            id: Uuid::new_v4().to_string(),
            employee_id,
            name: profile.name,
            role: profile.role,
            department: profile.department,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            emergency_contact: profile.emergency_contact,
            employment_type: profile.employment_type,
            status: AccountStatus::Active,
            hire_date: now.date_naive(),
            created_by: Some(creator.clone()),
            created_at: Some(now),
            generated_password: Some(password.clone()),
        };

        let mut updated = self.accounts.clone();
        updated.push(account.clone());
        self.credentials.save(&updated)?;
        self.accounts = updated;

        info!(
            "{} provisioned {} ({})",
            creator, account.employee_id, account.role
        );
        Ok(ProvisionResult { account, password })
    }

    /// Master Admin only. Applies `changes` to the account with internal id
    /// `id` and returns the updated record.
    pub async fn update_user(&mut self, id: &str, changes: AccountUpdate) -> Result<Account, AppError> {
        require_master_admin(self.sessions.current(), "update users")?;

        pause(self.config.mutation_delay()).await;

        let index = self.position(id)?;
        let mut updated = self.accounts.clone();
        changes.apply_to(&mut updated[index]);
        let account = updated[index].clone();

        self.credentials.save(&updated)?;
        self.accounts = updated;
        self.sessions.refresh(&account);

        info!("Updated account {}", account.employee_id);
        Ok(account)
    }

    /// Master Admin only, and never the caller's own account.
    pub async fn delete_user(&mut self, id: &str) -> Result<Account, AppError> {
        let actor = require_master_admin(self.sessions.current(), "delete users")?;
        ensure_not_self(actor, id)?;

        pause(self.config.mutation_delay()).await;

        let index = self.position(id)?;
        let mut updated = self.accounts.clone();
        let removed = updated.remove(index);

        self.credentials.save(&updated)?;
        self.accounts = updated;

        info!("Deleted account {}", removed.employee_id);
        Ok(removed)
    }

    /// Looks an account up by internal id or employee id.
    pub fn find_account(&self, key: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id == key)
            .or_else(|| self.accounts.iter().find(|a| a.employee_id == key))
    }

    fn position(&self, id: &str) -> Result<usize, AuthError> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{EmergencyContact, EmploymentType, Role};
    use crate::config::AppConfig;
    use crate::config::DEFAULT_SESSION_KEY;
    use crate::storage::MemoryStore;
    use crate::storage::kv::FailingStore;

    fn open(backend: &MemoryStore) -> AuthService<MemoryStore> {
        AuthService::open(
            backend.clone(),
            &AppConfig::default().storage,
            AuthConfig::immediate(),
        )
        .unwrap()
    }

    fn profile(role: Role) -> NewAccount {
        NewAccount {
            name: "Liza Mercado".into(),
            role,
            department: "Operations".into(),
            email: "liza.mercado@afflatus.com".into(),
            phone: "+63 917 222 3333".into(),
            address: "88 Shaw Blvd, Mandaluyong City".into(),
            employment_type: EmploymentType::Regular,
            emergency_contact: EmergencyContact {
                name: "Ramon Mercado".into(),
                relationship: "Father".into(),
                phone: "+63 917 444 5555".into(),
                address: "88 Shaw Blvd, Mandaluyong City".into(),
            },
        }
    }

    #[tokio::test]
    async fn failed_login_keeps_session_empty() {
        let mut service = open(&MemoryStore::new());
        assert!(service.login("EMP002", "wrong").await.is_err());
        assert!(!service.session().is_authenticated());
    }

    #[tokio::test]
    async fn provisioned_account_is_stamped() {
        let mut service = open(&MemoryStore::new());
        service.login("ADMIN001", "admin123").await.unwrap();

        let created = service.create_user(profile(Role::Admin)).await.unwrap();
        let account = &created.account;
        assert_eq!(account.employee_id, "ADM001");
        assert_eq!(account.created_by.as_deref(), Some("ADMIN001"));
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.hire_date, Utc::now().date_naive());
        assert_eq!(account.generated_password.as_deref(), Some(created.password.as_str()));
        assert!(Uuid::parse_str(&account.id).is_ok());
    }

    #[tokio::test]
    async fn invalid_profile_allocates_nothing() {
        let mut service = open(&MemoryStore::new());
        service.login("ADMIN001", "admin123").await.unwrap();

        let mut bad = profile(Role::Hr);
        bad.name = String::new();
        let err = service.create_user(bad).await.unwrap_err();
        assert!(matches!(err.as_auth(), Some(AuthError::InvalidProfile(_))));
        assert_eq!(service.get_all_users().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn find_account_accepts_either_identifier() {
        let service = open(&MemoryStore::new());
        assert_eq!(service.find_account("2").map(|a| a.employee_id.as_str()), Some("EMP002"));
        assert_eq!(service.find_account("EMP002").map(|a| a.id.as_str()), Some("2"));
        assert!(service.find_account("EMP404").is_none());
    }

    #[tokio::test]
    async fn updating_self_refreshes_the_session() {
        let mut service = open(&MemoryStore::new());
        service.login("ADMIN001", "admin123").await.unwrap();

        let changes = AccountUpdate {
            phone: Some("+63 917 000 9999".into()),
            ..Default::default()
        };
        service.update_user("0", changes).await.unwrap();
        assert_eq!(service.current_user().unwrap().phone, "+63 917 000 9999");
    }

    #[tokio::test]
    async fn session_write_failure_does_not_fail_a_committed_update() {
        let backend = FailingStore::default();
        let mut service = AuthService::open(
            backend.clone(),
            &AppConfig::default().storage,
            AuthConfig::immediate(),
        )
        .unwrap();
        service.login("ADMIN001", "admin123").await.unwrap();
        backend.fail_writes_to(DEFAULT_SESSION_KEY);

        let changes = AccountUpdate {
            phone: Some("+63 917 000 9999".into()),
            ..Default::default()
        };
        let updated = service.update_user("0", changes).await.unwrap();
        assert_eq!(updated.phone, "+63 917 000 9999");
        assert_eq!(service.current_user().unwrap().phone, "+63 917 000 9999");
        assert_eq!(service.find_account("0").unwrap().phone, "+63 917 000 9999");
    }

    #[tokio::test]
    async fn simulated_latency_is_honoured() {
        let backend = MemoryStore::new();
        let mut service = AuthService::open(
            backend,
            &AppConfig::default().storage,
            AuthConfig {
                login_delay_ms: 20,
                mutation_delay_ms: 0,
            },
        )
        .unwrap();

        let started = std::time::Instant::now();
        service.login("EMP003", "emp123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
