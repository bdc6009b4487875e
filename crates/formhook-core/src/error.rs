//! Error types for `formhook-core`.
//!
//! Each variant carries enough context to diagnose the problem without a
//! debugger. Validation failures are data, not faults: they come back as
//! ordered per-field issues the presentation layer can render directly.

use serde::Serialize;

/// Errors constructing or parsing a form definition.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// Two descriptors share a name. Later values would silently overwrite
    /// earlier ones in the submission payload.
    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    /// A descriptor uses a payload key the pipeline injects at submit time.
    #[error("field name '{name}' is reserved for the submission payload")]
    ReservedField { name: String },

    /// The definition document is not valid JSON or has the wrong shape.
    #[error("invalid form definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One failed field from a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Name of the field the issue is tied to.
    pub field: String,
    /// Human-readable message for the presentation layer.
    pub message: String,
}

impl FieldIssue {
    /// Build an issue for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Per-field failures from a single validation pass, in descriptor order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed for {} field(s)", .issues.len())]
pub struct ValidationErrors {
    /// One entry per failing field.
    pub issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    /// The message attached to `field`, if it failed.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}
