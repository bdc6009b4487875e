//! Form definitions — the content collaborator's form block.

use serde::{Deserialize, Serialize};

use crate::descriptor::FieldSet;
use crate::error::DefinitionError;

/// A complete declarative form: field descriptors plus the configured
/// feedback messages the controller surfaces on terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Ordered field descriptors.
    pub fields: FieldSet,
    /// Caption for the submit affordance. Presentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    /// Message surfaced when a submission is delivered.
    pub success_message: String,
    /// Message surfaced when delivery fails, regardless of cause.
    pub error_message: String,
}

impl FormDefinition {
    /// Parse a definition from a JSON document.
    ///
    /// Field-set invariants (unique, non-reserved names) are enforced
    /// during deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] for malformed JSON or a
    /// definition violating the field-set invariants.
    pub fn from_json(raw: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(raw)?)
    }
}
