//! Feedback state — the submit lifecycle surfaced to the presentation layer.
//!
//! The controller emits [`FeedbackState`] values; an independent
//! presentation collaborator renders them and offers a dismiss action.
//! Lifecycle: idle → submitting → success | error, then back to idle on
//! dismiss or when the next submission attempt begins.

use serde::Serialize;

/// Submit lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    /// No submission in progress or pending feedback.
    Idle,
    /// A delivery is in flight; repeat submits are ignored.
    Submitting,
    /// The last delivery was accepted.
    Success,
    /// The last delivery failed (validation never reaches this state).
    Error,
}

/// Value object describing what the feedback surface should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackState {
    /// Current phase.
    pub status: FeedbackStatus,
    /// Configured message for terminal phases; `None` otherwise.
    pub message: Option<String>,
}

impl FeedbackState {
    /// The initial state.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            status: FeedbackStatus::Idle,
            message: None,
        }
    }

    /// True while a delivery is in flight.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.status == FeedbackStatus::Submitting
    }

    /// Enter the submitting phase, clearing any prior terminal message.
    pub fn begin(&mut self) {
        self.status = FeedbackStatus::Submitting;
        self.message = None;
    }

    /// Resolve to success with the configured message.
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = FeedbackStatus::Success;
        self.message = Some(message.into());
    }

    /// Resolve to error with the configured message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FeedbackStatus::Error;
        self.message = Some(message.into());
    }

    /// Reset a terminal state to idle. No-op while idle or submitting.
    pub fn dismiss(&mut self) {
        if matches!(self.status, FeedbackStatus::Success | FeedbackStatus::Error) {
            *self = Self::idle();
        }
    }
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::idle()
    }
}
