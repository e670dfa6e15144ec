//! Console route table
//!
//! Every view of the HR console with the roles it demands, plus the routing
//! decision taken before a view is mounted.

use super::gate::{MANAGEMENT, MASTER_ADMIN_ONLY, RequiredRoles, can_access};
use crate::session::Session;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    /// `None` for public views
    pub required: Option<RequiredRoles<'static>>,
    /// Listed in the sidebar
    pub in_navigation: bool,
}

const fn public(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        required: None,
        in_navigation: false,
    }
}

const fn guarded(
    path: &'static str,
    name: &'static str,
    required: RequiredRoles<'static>,
    in_navigation: bool,
) -> Route {
    Route {
        path,
        name,
        required: Some(required),
        in_navigation,
    }
}

pub static ROUTES: [Route; 13] = [
    public(HOME, "Home"),
    public(LOGIN, "Login"),
    guarded(DASHBOARD, "Dashboard", RequiredRoles::All, true),
    guarded("/user-management", "User Management", MASTER_ADMIN_ONLY, true),
    guarded("/employees", "Employees", MANAGEMENT, true),
    guarded("/leave", "Leave Management", RequiredRoles::All, true),
    guarded("/payroll", "Payroll", MANAGEMENT, true),
    guarded("/performance", "Performance", RequiredRoles::All, true),
    guarded("/recruitment", "Recruitment", MANAGEMENT, true),
    guarded("/training", "Training", RequiredRoles::All, true),
    guarded("/reports", "Reports", MANAGEMENT, true),
    guarded("/profile", "Profile", RequiredRoles::All, false),
    guarded("/settings", "Settings", MANAGEMENT, false),
];

/// Outcome of trying to open a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(&'static Route),
    Redirect(&'static str),
}

pub fn find_route(path: &str) -> Option<&'static Route> {
    let normalized = match path.trim() {
        "" => HOME,
        p if p.len() > 1 => p.trim_end_matches('/'),
        p => p,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Unknown paths go home, signed-out visitors go to the login view and
/// signed-in accounts lacking the role land on the dashboard.
pub fn resolve(path: &str, session: &Session) -> RouteDecision {
    let Some(route) = find_route(path) else {
        return RouteDecision::Redirect(HOME);
    };

    match route.required {
        None => RouteDecision::Render(route),
        Some(_) if !session.is_authenticated() => RouteDecision::Redirect(LOGIN),
        Some(required) if can_access(required, session) => RouteDecision::Render(route),
        Some(_) => RouteDecision::Redirect(DASHBOARD),
    }
}

/// Sidebar entries the session may open, in menu order.
pub fn navigation(session: &Session) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| route.in_navigation)
        .filter(|route| route.required.is_some_and(|required| can_access(required, session)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::storage::seed::seed_accounts;

    fn session_for(role: Role) -> Session {
        let account = seed_accounts()
            .into_iter()
            .find(|a| a.role == role)
            .unwrap_or_else(|| {
                let mut a = seed_accounts().remove(3);
                a.role = role;
                a
            });
        Session::Authenticated(account)
    }

    fn names(routes: Vec<&'static Route>) -> Vec<&'static str> {
        routes.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn public_views_render_for_anyone() {
        let nobody = Session::Unauthenticated;
        assert!(matches!(resolve("/", &nobody), RouteDecision::Render(r) if r.name == "Home"));
        assert!(matches!(resolve("/login", &nobody), RouteDecision::Render(_)));
    }

    #[test]
    fn protected_views_send_visitors_to_login() {
        let nobody = Session::Unauthenticated;
        assert_eq!(resolve("/dashboard", &nobody), RouteDecision::Redirect(LOGIN));
        assert_eq!(resolve("/payroll", &nobody), RouteDecision::Redirect(LOGIN));
    }

    #[test]
    fn missing_role_lands_on_dashboard() {
        let employee = session_for(Role::Employee);
        assert_eq!(resolve("/payroll", &employee), RouteDecision::Redirect(DASHBOARD));
        assert_eq!(
            resolve("/user-management", &session_for(Role::Hr)),
            RouteDecision::Redirect(DASHBOARD)
        );
        assert!(matches!(resolve("/training", &employee), RouteDecision::Render(_)));
    }

    #[test]
    fn unknown_paths_go_home() {
        assert_eq!(
            resolve("/nowhere", &session_for(Role::MasterAdmin)),
            RouteDecision::Redirect(HOME)
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(find_route("/reports/").map(|r| r.name), Some("Reports"));
    }

    #[test]
    fn navigation_follows_roles() {
        assert!(navigation(&Session::Unauthenticated).is_empty());
        assert_eq!(
            names(navigation(&session_for(Role::Intern))),
            ["Dashboard", "Leave Management", "Performance", "Training"]
        );
        assert_eq!(navigation(&session_for(Role::Admin)).len(), 8);
        assert_eq!(
            names(navigation(&session_for(Role::MasterAdmin))),
            [
                "Dashboard",
                "User Management",
                "Employees",
                "Leave Management",
                "Payroll",
                "Performance",
                "Recruitment",
                "Training",
                "Reports"
            ]
        );
    }
}
