//! Durable storage
//!
//! Key/value backends, the credential store built on them and the
//! first-run seed.

pub mod credentials;
pub mod kv;
pub mod seed;

pub use credentials::CredentialStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
