//! Credential store
//!
//! The full account list persisted as one JSON array under a single key.

use log::info;

use super::kv::KeyValueStore;
use super::seed::seed_accounts;
use crate::auth::Account;
use crate::error::StorageError;

pub struct CredentialStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Returns the persisted accounts. On first run the demo seed is written
    /// and returned.
    pub fn load(&self) -> Result<Vec<Account>, StorageError> {
        match self.backend.get(&self.key)? {
            Some(raw) => {
                let accounts: Vec<Account> =
                    serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
                        key: self.key.clone(),
                        source,
                    })?;
                info!("Loaded {} accounts from {}", accounts.len(), self.key);
                Ok(accounts)
            }
            None => {
                let accounts = seed_accounts();
                self.save(&accounts)?;
                info!(
                    "No stored accounts under {}; seeded {} demo accounts",
                    self.key,
                    accounts.len()
                );
                Ok(accounts)
            }
        }
    }

    /// Replaces the persisted list.
    pub fn save(&self, accounts: &[Account]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(accounts).map_err(|source| {
            StorageError::Serialization {
                key: self.key.clone(),
                source,
            }
        })?;
        self.backend.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    #[test]
    fn first_load_seeds_and_persists() {
        let backend = MemoryStore::new();
        let store = CredentialStore::new(backend.clone(), "users");

        let accounts = store.load().unwrap();
        let ids: Vec<_> = accounts.iter().map(|a| a.employee_id.as_str()).collect();
        assert_eq!(ids, ["ADMIN001", "EMP001", "EMP002", "EMP003"]);
        assert!(backend.get("users").unwrap().is_some());
    }

    #[test]
    fn saved_list_replaces_the_seed() {
        let store = CredentialStore::new(MemoryStore::new(), "users");
        let mut accounts = store.load().unwrap();
        accounts.truncate(2);
        store.save(&accounts).unwrap();

        assert_eq!(store.load().unwrap(), accounts);
    }

    #[test]
    fn malformed_snapshot_is_an_error_not_a_reseed() {
        let backend = MemoryStore::new();
        backend.set("users", "not json").unwrap();
        let store = CredentialStore::new(backend.clone(), "users");

        assert!(matches!(
            store.load(),
            Err(StorageError::Serialization { .. })
        ));
        assert_eq!(backend.get("users").unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn snapshot_uses_display_roles_and_camel_case() {
        let backend = MemoryStore::new();
        CredentialStore::new(backend.clone(), "users").load().unwrap();
        let raw = backend.get("users").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["role"], "Master Admin");
        assert_eq!(json[0]["employeeId"], "ADMIN001");
        assert_eq!(json[3]["hireDate"], "2021-06-15");
        assert!(json[1].get("generatedPassword").is_none());
    }
}
