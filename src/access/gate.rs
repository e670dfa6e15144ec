//! Access control gate
//!
//! Decides whether the current session may see a view or perform a
//! privileged mutation.

use crate::auth::{Account, Role};
use crate::error::AuthError;
use crate::session::Session;

/// Roles a view demands. `All` admits any signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRoles<'a> {
    All,
    Only(&'a [Role]),
}

pub const MASTER_ADMIN_ONLY: RequiredRoles<'static> = RequiredRoles::Only(&[Role::MasterAdmin]);
pub const MANAGEMENT: RequiredRoles<'static> = RequiredRoles::Only(&Role::MANAGEMENT);

/// Never true without a session.
pub fn can_access(required: RequiredRoles<'_>, session: &Session) -> bool {
    match (required, session.role()) {
        (_, None) => false,
        (RequiredRoles::All, Some(_)) => true,
        (RequiredRoles::Only(roles), Some(role)) => roles.contains(&role),
    }
}

/// Returns the acting Master Admin, or `Unauthorized` naming `action`.
pub fn require_master_admin<'s>(session: &'s Session, action: &str) -> Result<&'s Account, AuthError> {
    match session.account() {
        Some(account) if account.role.is_master_admin() => Ok(account),
        _ => Err(AuthError::unauthorized(action)),
    }
}

/// Refuses removal of the actor's own account.
pub fn ensure_not_self(actor: &Account, target_id: &str) -> Result<(), AuthError> {
    if actor.id == target_id {
        Err(AuthError::CannotSelfDelete)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_accounts;

    fn session_for(role: Role) -> Session {
        let mut account = seed_accounts().remove(3);
        account.role = role;
        Session::Authenticated(account)
    }

    #[test]
    fn no_session_never_passes() {
        let nobody = Session::Unauthenticated;
        assert!(!can_access(RequiredRoles::All, &nobody));
        assert!(!can_access(MANAGEMENT, &nobody));
        assert!(!can_access(RequiredRoles::Only(&Role::ALL), &nobody));
    }

    #[test]
    fn all_admits_every_role() {
        for role in Role::ALL {
            assert!(can_access(RequiredRoles::All, &session_for(role)));
        }
    }

    #[test]
    fn role_lists_are_membership_checks() {
        assert!(can_access(MANAGEMENT, &session_for(Role::Hr)));
        assert!(!can_access(MANAGEMENT, &session_for(Role::Employee)));
        assert!(!can_access(MANAGEMENT, &session_for(Role::Intern)));
        assert!(can_access(MASTER_ADMIN_ONLY, &session_for(Role::MasterAdmin)));
        assert!(!can_access(MASTER_ADMIN_ONLY, &session_for(Role::PresidentCeo)));
        assert!(!can_access(RequiredRoles::Only(&[]), &session_for(Role::MasterAdmin)));
    }

    #[test]
    fn privileged_actions_need_master_admin() {
        let err = require_master_admin(&session_for(Role::ItHead), "delete users").unwrap_err();
        assert_eq!(err.to_string(), "Only Master Admin can delete users");
        assert!(require_master_admin(&Session::Unauthenticated, "delete users").is_err());
        assert!(require_master_admin(&session_for(Role::MasterAdmin), "delete users").is_ok());
    }

    #[test]
    fn self_removal_is_refused() {
        let admin = seed_accounts().remove(0);
        assert!(matches!(
            ensure_not_self(&admin, "0"),
            Err(AuthError::CannotSelfDelete)
        ));
        assert!(ensure_not_self(&admin, "3").is_ok());
    }
}
