//! Startup routing for Squadlink.
//!
//! Consults the onboarding gate exactly once and commits the initial route
//! through the injected navigation service.

pub mod routes;
pub mod startup_routing;

pub use routes::{AUTH_ROUTE, ONBOARDING_ROUTE};
pub use startup_routing::{commit_initial_route, resolve_initial_route, NavigationService};
