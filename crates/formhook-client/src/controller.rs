//! The submission controller — drives one form instance from staged input
//! to a terminal feedback state.
//!
//! State machine: idle → submitting → success | error, back to idle on
//! dismiss or when the next attempt begins. While submitting, a repeat
//! submit is ignored; the state gate is the only concurrency control.

use std::collections::BTreeMap;

use tracing::{error, info};

use formhook_core::{
    FeedbackState, FieldSet, FormDefinition, SubmissionPayload, ValidationErrors, ValidationSchema,
};

use crate::sink::WebhookSink;

/// A draft value was staged for a name outside the descriptor set.
#[derive(Debug, thiserror::Error)]
#[error("unknown field: {name}")]
pub struct UnknownField {
    /// The rejected field name.
    pub name: String,
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The delivery resolved; the enclosed state is success or error.
    Completed(FeedbackState),
    /// Validation failed. Nothing was sent and the state returned to idle.
    Invalid(ValidationErrors),
    /// A delivery was already in flight; this attempt was ignored.
    InFlight,
}

/// Orchestrates validate → send → feedback for a single form instance.
///
/// Owns the draft values between attempts: a successful delivery clears
/// them, a failed one preserves them so the user can retry without
/// retyping.
pub struct SubmissionController {
    fields: FieldSet,
    schema: ValidationSchema,
    success_message: String,
    error_message: String,
    sink: WebhookSink,
    draft: BTreeMap<String, String>,
    state: FeedbackState,
}

impl SubmissionController {
    /// Build a controller for `definition`, delivering through `sink`.
    ///
    /// The validation schema is derived once, here.
    #[must_use]
    pub fn new(definition: &FormDefinition, sink: WebhookSink) -> Self {
        Self {
            schema: ValidationSchema::derive(&definition.fields),
            fields: definition.fields.clone(),
            success_message: definition.success_message.clone(),
            error_message: definition.error_message.clone(),
            sink,
            draft: BTreeMap::new(),
            state: FeedbackState::idle(),
        }
    }

    /// Stage a draft value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] for names outside the descriptor set, so
    /// the payload can never carry undeclared keys.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        if !self.fields.contains(name) {
            return Err(UnknownField {
                name: name.to_owned(),
            });
        }
        self.draft.insert(name.to_owned(), value.into());
        Ok(())
    }

    /// The staged value for `name`, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.draft.get(name).map(String::as_str)
    }

    /// The current feedback state, for the presentation collaborator.
    #[must_use]
    pub fn state(&self) -> &FeedbackState {
        &self.state
    }

    /// Reset a terminal feedback state to idle (the dismiss affordance).
    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }

    /// Drive one submission attempt to its terminal state.
    ///
    /// Validation failures never reach the network; delivery failures are
    /// collapsed into the configured error message and logged with their
    /// concrete cause. This method never panics and never propagates a
    /// transport error to the caller.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_in_flight() {
            return SubmitOutcome::InFlight;
        }

        if let Err(errors) = self.schema.validate(&self.draft) {
            // A fresh attempt resets any stale terminal feedback.
            self.state.dismiss();
            return SubmitOutcome::Invalid(errors);
        }

        self.state.begin();
        let payload = SubmissionPayload::assemble(self.draft.clone(), self.sink.source());

        match self.sink.deliver(&payload).await {
            Ok(status) => {
                info!(status = %status, "submission accepted");
                self.draft.clear();
                self.state.succeed(self.success_message.clone());
            }
            Err(cause) => {
                // Draft values are kept so the user can retry as-is.
                error!(%cause, "submission delivery failed");
                self.state.fail(self.error_message.clone());
            }
        }

        SubmitOutcome::Completed(self.state.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::WebhookConfig;
    use formhook_core::FeedbackStatus;

    fn definition() -> FormDefinition {
        FormDefinition::from_json(
            r#"{
                "fields": [
                    {"name": "name", "label": "Full Name", "kind": "short-text", "required": true},
                    {"name": "email", "label": "E-mail", "kind": "email", "required": true}
                ],
                "success_message": "Thanks!",
                "error_message": "Please try again."
            }"#,
        )
        .unwrap()
    }

    fn controller() -> SubmissionController {
        // Port 9 is discard; nothing in these tests may actually connect.
        let config = WebhookConfig::new("http://127.0.0.1:9/hook").unwrap();
        SubmissionController::new(&definition(), WebhookSink::new(&config).unwrap())
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        let mut form = controller();
        let err = form.set_value("company", "ACME").unwrap_err();
        assert_eq!(err.name, "company");
        assert!(form.value("company").is_none());
    }

    #[test]
    fn staged_values_are_readable_back() {
        let mut form = controller();
        form.set_value("name", "Ana").unwrap();
        assert_eq!(form.value("name"), Some("Ana"));
        assert!(form.value("email").is_none());
    }

    #[tokio::test]
    async fn invalid_draft_stays_idle_and_surfaces_field_errors() {
        let mut form = controller();
        form.set_value("email", "ana@x.com").unwrap();

        let outcome = form.submit().await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected a validation failure, got {outcome:?}");
        };
        assert_eq!(errors.for_field("name"), Some("Full Name is required"));
        assert_eq!(form.state().status, FeedbackStatus::Idle);
        // Input is untouched by a validation failure.
        assert_eq!(form.value("email"), Some("ana@x.com"));
    }

    #[tokio::test]
    async fn repeat_submit_while_in_flight_is_ignored() {
        let mut form = controller();
        form.set_value("name", "Ana").unwrap();
        form.set_value("email", "ana@x.com").unwrap();

        form.state.begin();
        let outcome = form.submit().await;
        assert!(matches!(outcome, SubmitOutcome::InFlight));
        assert!(form.state().is_in_flight());
        assert_eq!(form.value("name"), Some("Ana"));
    }

    #[tokio::test]
    async fn dismiss_returns_terminal_state_to_idle() {
        let mut form = controller();
        form.state.begin();
        form.state.fail("Please try again.");

        form.dismiss();
        assert_eq!(form.state().status, FeedbackStatus::Idle);
        assert!(form.state().message.is_none());
    }
}
