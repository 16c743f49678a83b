use anyhow::{Context, Result};
use squad_onboarding::OnboardingGate;

use crate::routes::{AUTH_ROUTE, ONBOARDING_ROUTE};

#[async_trait::async_trait]
/// Trait contract for the routing collaborator that commits the initial route.
pub trait NavigationService: Send + Sync {
    /// Replaces the current route so the committed screen has no back entry.
    async fn replace_route(&self, path: &str) -> Result<()>;
}

/// Reads the gate once and picks the first route: the introductory sequence
/// when onboarding has not been completed, the auth flow otherwise.
pub async fn resolve_initial_route(gate: &OnboardingGate) -> &'static str {
    if gate.status().await {
        AUTH_ROUTE
    } else {
        ONBOARDING_ROUTE
    }
}

/// Resolves and commits the initial route. Called once at startup, before
/// any other navigation.
pub async fn commit_initial_route(
    gate: &OnboardingGate,
    navigation: &dyn NavigationService,
) -> Result<&'static str> {
    let route = resolve_initial_route(gate).await;
    tracing::debug!(route, "committing initial route");
    navigation
        .replace_route(route)
        .await
        .with_context(|| format!("failed to commit initial route {route}"))?;
    Ok(route)
}
