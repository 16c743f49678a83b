//! First-run onboarding state for Squadlink.
//!
//! Implements the onboarding gate (a single persisted completion flag that
//! decides whether the introductory sequence runs before the auth flow) and
//! the slide-deck flow that marks the gate complete when the user finishes
//! or skips the sequence.

pub mod onboarding_flow;
pub mod onboarding_gate;

pub use onboarding_flow::{default_slides, FlowProgress, OnboardingFlow, OnboardingSlide};
pub use onboarding_gate::{
    OnboardingGate, OnboardingState, ONBOARDING_COMPLETED_KEY, ONBOARDING_COMPLETED_MARKER,
};
