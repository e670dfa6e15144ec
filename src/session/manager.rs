//! Session manager
//!
//! Owns the active `Session` and mirrors it to durable storage so a restart
//! can pick it up again.

use log::{info, warn};

use super::state::Session;
use crate::auth::Account;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub struct SessionManager<S> {
    backend: S,
    key: String,
    current: Session,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Starts unauthenticated; call [`SessionManager::restore`] to pick up a
    /// persisted session.
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            current: Session::Unauthenticated,
        }
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    /// Reconciles the persisted session against `accounts`.
    ///
    /// The stored record is matched by internal id and replaced with the
    /// account list's current copy. A record whose account is gone, or that
    /// no longer parses, is dropped from storage.
    pub fn restore(&mut self, accounts: &[Account]) -> Result<&Session, StorageError> {
        self.current = Session::Unauthenticated;

        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(&self.current);
        };

        let stored: Account = match serde_json::from_str(&raw) {
            Ok(account) => account,
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                self.backend.remove(&self.key)?;
                return Ok(&self.current);
            }
        };

        match accounts.iter().find(|a| a.id == stored.id) {
            Some(account) => {
                info!("Restored session for {}", account.employee_id);
                self.current = Session::Authenticated(account.clone());
            }
            None => {
                warn!(
                    "Session for {} refers to a removed account; signing out",
                    stored.employee_id
                );
                self.backend.remove(&self.key)?;
            }
        }

        Ok(&self.current)
    }

    /// Makes `account` the active identity and persists it.
    pub fn begin(&mut self, account: Account) -> Result<(), StorageError> {
        self.persist(&account)?;
        self.current = Session::Authenticated(account);
        Ok(())
    }

    /// Adopts `account` if it is the signed-in one, then mirrors it to
    /// storage. A failed write is only logged: `restore` matches the record
    /// by id and takes the account list's copy, so an outdated record is
    /// harmless.
    pub fn refresh(&mut self, account: &Account) {
        let is_current = self.current.account().is_some_and(|a| a.id == account.id);
        if !is_current {
            return;
        }

        self.current = Session::Authenticated(account.clone());
        if let Err(e) = self.persist(account) {
            warn!(
                "Could not persist refreshed session for {}: {}",
                account.employee_id, e
            );
        }
    }

    fn persist(&self, account: &Account) -> Result<(), StorageError> {
        let raw = serde_json::to_string(account).map_err(|source| {
            StorageError::Serialization {
                key: self.key.clone(),
                source,
            }
        })?;
        self.backend.set(&self.key, &raw)
    }

    /// Clears the session and its persisted record.
    pub fn end(&mut self) -> Result<(), StorageError> {
        self.current = Session::Unauthenticated;
        self.backend.remove(&self.key)
    }
}
