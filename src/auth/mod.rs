//! Authentication system
//!
//! Accounts and roles, credential validation, provisioning (employee ids and
//! generated passwords) and the service tying them to storage and session.

pub mod account;
pub mod credentials;
pub mod employee_id;
pub mod password;
pub mod results;
pub mod role;
pub mod service;
pub mod validator;

pub use account::{Account, AccountStatus, AccountUpdate, EmergencyContact, EmploymentType, NewAccount};
pub use results::ProvisionResult;
pub use role::{PasswordTier, Role};
pub use service::AuthService;
pub use validator::validate_credentials;
