//! Configuration management for the HR console
//!
//! Layers built-in defaults, an optional `config.toml` and environment
//! overrides (`HR_CONSOLE__AUTH__LOGIN_DELAY_MS=0`, ...).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Complete console configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

/// Where and under which keys accounts and the session are persisted
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per storage key
    pub data_dir: String,

    /// Key of the credential store snapshot
    pub users_key: String,

    /// Key of the persisted session record
    pub session_key: String,
}

/// Simulated latency of authentication and provisioning calls
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub login_delay_ms: u64,
    pub mutation_delay_ms: u64,
}

pub const DEFAULT_USERS_KEY: &str = "afflatus_hr_users";
pub const DEFAULT_SESSION_KEY: &str = "hr_user";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: "./hr_data".to_string(),
                users_key: DEFAULT_USERS_KEY.to_string(),
                session_key: DEFAULT_SESSION_KEY.to_string(),
            },
            auth: AuthConfig {
                login_delay_ms: 1000,
                mutation_delay_ms: 500,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Same as [`AppConfig::load`] with an explicit config file stem
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("storage.data_dir", defaults.storage.data_dir)?
            .set_default("storage.users_key", defaults.storage.users_key)?
            .set_default("storage.session_key", defaults.storage.session_key)?
            .set_default("auth.login_delay_ms", defaults.auth.login_delay_ms as i64)?
            .set_default(
                "auth.mutation_delay_ms",
                defaults.auth.mutation_delay_ms as i64,
            )?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("HR_CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::Message(
                "storage.data_dir cannot be empty".into(),
            ));
        }

        if self.storage.users_key.trim().is_empty() || self.storage.session_key.trim().is_empty()
        {
            return Err(ConfigError::Message("storage keys cannot be empty".into()));
        }

        if self.storage.users_key == self.storage.session_key {
            return Err(ConfigError::Message(
                "storage.users_key and storage.session_key must differ".into(),
            ));
        }

        Ok(())
    }
}

impl StorageConfig {
    /// Get the data directory as PathBuf
    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

impl AuthConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.mutation_delay_ms)
    }

    /// No simulated latency, for tests and scripted runs
    pub fn immediate() -> Self {
        Self {
            login_delay_ms: 0,
            mutation_delay_ms: 0,
        }
    }
}
