//! Access control
//!
//! Role checks for views and privileged mutations, and the console's route
//! table.

pub mod gate;
pub mod routes;

pub use gate::{RequiredRoles, can_access};
pub use routes::{Route, RouteDecision, navigation, resolve};
