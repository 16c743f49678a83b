use anyhow::{bail, Result};

use crate::onboarding_gate::OnboardingGate;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One informational screen of the introductory sequence.
pub struct OnboardingSlide {
    pub title: String,
    pub body: String,
}

impl OnboardingSlide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The stock Squadlink introductory deck.
pub fn default_slides() -> Vec<OnboardingSlide> {
    vec![
        OnboardingSlide::new(
            "Find your squad",
            "Discover players who are into the same games as you.",
        ),
        OnboardingSlide::new(
            "Match on your terms",
            "Filter by game, rank, region, and play schedule.",
        ),
        OnboardingSlide::new(
            "Team up and play",
            "Jump into a lobby together the moment you match.",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of advancing the introductory sequence by one step.
pub enum FlowProgress {
    /// Moved to the slide at this index; more slides remain.
    Advanced { slide_index: usize },
    /// The final slide's primary action ran; the gate is now complete.
    Finished,
}

/// Cursor over the introductory slide deck.
///
/// Finishing the last slide and skipping are equivalent: each calls the
/// gate's `complete` exactly once and ends the flow. Rendering the slides is
/// the caller's concern.
pub struct OnboardingFlow<'a> {
    gate: &'a OnboardingGate,
    slides: Vec<OnboardingSlide>,
    cursor: usize,
    finished: bool,
}

impl<'a> OnboardingFlow<'a> {
    pub fn new(gate: &'a OnboardingGate, slides: Vec<OnboardingSlide>) -> Result<Self> {
        if slides.is_empty() {
            bail!("onboarding flow requires at least one slide");
        }
        Ok(Self {
            gate,
            slides,
            cursor: 0,
            finished: false,
        })
    }

    pub fn current_slide(&self) -> &OnboardingSlide {
        &self.slides[self.cursor]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Runs the current slide's primary action: moves to the next slide, or
    /// completes the gate when the current slide is the last one. A write
    /// failure leaves the flow unfinished so the action can be retried.
    pub async fn advance(&mut self) -> Result<FlowProgress> {
        if self.finished {
            bail!("onboarding flow already finished");
        }
        if self.cursor + 1 < self.slides.len() {
            self.cursor += 1;
            return Ok(FlowProgress::Advanced {
                slide_index: self.cursor,
            });
        }
        self.gate.complete().await?;
        self.finished = true;
        tracing::debug!(slides = self.slides.len(), "onboarding flow finished");
        Ok(FlowProgress::Finished)
    }

    /// Skips the rest of the sequence from any slide. Equivalent to
    /// finishing: the gate ends up complete either way.
    pub async fn skip(&mut self) -> Result<()> {
        if self.finished {
            bail!("onboarding flow already finished");
        }
        self.gate.complete().await?;
        self.finished = true;
        tracing::debug!(skipped_at = self.cursor, "onboarding flow skipped");
        Ok(())
    }
}
