/// Route of the first-run introductory sequence.
pub const ONBOARDING_ROUTE: &str = "/onboarding";

/// Route of the authentication flow, the app's normal entry point.
pub const AUTH_ROUTE: &str = "/auth";
