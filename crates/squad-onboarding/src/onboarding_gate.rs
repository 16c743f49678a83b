use std::sync::Arc;

use anyhow::{Context, Result};
use squad_storage::KeyValueStore;

/// Fixed store key owning the onboarding completion flag. No other component
/// writes this key.
pub const ONBOARDING_COMPLETED_KEY: &str = "squadlink_onboarding_completed";

/// Sentinel value marking the onboarding sequence as finished or skipped.
/// Anything else stored under the key decodes as not completed.
pub const ONBOARDING_COMPLETED_MARKER: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `OnboardingState` values.
pub enum OnboardingState {
    Unseen,
    Seen,
}

impl OnboardingState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Seen => "seen",
        }
    }
}

/// Gate deciding, once per installation, whether the first-run introductory
/// sequence is shown before the auth flow.
///
/// Constructed once at startup with an injected store and passed by
/// reference to the navigation layer. Reads fail safe: a broken or garbled
/// store yields "not completed" so a storage fault can re-show onboarding
/// but can never block startup. Writes propagate their errors so the caller
/// can retry, warn, or proceed without persistence.
pub struct OnboardingGate {
    store: Arc<dyn KeyValueStore>,
}

impl OnboardingGate {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns `true` only when the stored value is exactly the completion
    /// marker. Absence, any other value, and store failures all yield
    /// `false`; failures and unrecognized values are logged, not propagated.
    pub async fn status(&self) -> bool {
        match self.store.get(ONBOARDING_COMPLETED_KEY).await {
            Ok(Some(value)) if value == ONBOARDING_COMPLETED_MARKER => true,
            Ok(Some(value)) => {
                // The stored value is untrusted; log its shape, not its content.
                tracing::warn!(
                    value_len = value.len(),
                    "ignoring unrecognized onboarding completion value; treating as not completed"
                );
                false
            }
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(
                    error = ?error,
                    "failed to read onboarding flag; treating as not completed"
                );
                false
            }
        }
    }

    pub async fn state(&self) -> OnboardingState {
        if self.status().await {
            OnboardingState::Seen
        } else {
            OnboardingState::Unseen
        }
    }

    /// Persists the completion marker. Idempotent: completing an already
    /// completed gate has no observable effect.
    pub async fn complete(&self) -> Result<()> {
        self.store
            .set(ONBOARDING_COMPLETED_KEY, ONBOARDING_COMPLETED_MARKER)
            .await
            .context("failed to persist onboarding completion")
    }

    /// Clears the flag back to its fresh-install state. Development and
    /// debugging only.
    pub async fn reset(&self) -> Result<()> {
        self.store
            .delete(ONBOARDING_COMPLETED_KEY)
            .await
            .context("failed to reset onboarding flag")
    }
}
