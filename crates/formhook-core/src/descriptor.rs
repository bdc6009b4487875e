//! Field descriptors — the declarative shape of one form input.
//!
//! A [`FieldSet`] is what the content collaborator supplies: an ordered
//! list of [`FieldDescriptor`]s. Names must be unique within a set (a
//! collision would silently overwrite submission values) and must not use
//! the payload keys the pipeline injects itself.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// Payload keys injected at submit time. Descriptor names must not collide.
pub const RESERVED_NAMES: [&str; 2] = ["timestamp", "source"];

/// The input kind of a form field, selecting its format rule.
///
/// Serialized as a kebab-case string (`short-text`, `email`, `phone`,
/// `long-text`). Unrecognized strings deserialize to [`FieldKind::Other`]
/// rather than failing the parse; such fields validate as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Single-line free text. Presence is the only constraint.
    ShortText,
    /// E-mail address.
    Email,
    /// Phone number in `(DD) DDDDD-DDDD` form.
    Phone,
    /// Multi-line free text. Presence is the only constraint.
    LongText,
    /// Anything else — kept verbatim so callers can inspect or reject it.
    Other(String),
}

impl FieldKind {
    /// The kebab-case wire form of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ShortText => "short-text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::LongText => "long-text",
            Self::Other(kind) => kind,
        }
    }

    /// False for kinds outside the recognized set.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "short-text" => Self::ShortText,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "long-text" => Self::LongText,
            _ => Self::Other(raw),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// Declarative description of one form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique identifier — the key under which the entered value is sent.
    pub name: String,
    /// Human-readable caption, used in "required" error messages.
    pub label: String,
    /// Input kind selecting the format rule.
    pub kind: FieldKind,
    /// Presentation hint for the rendering collaborator. Ignored by logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether an absent or blank value is an error.
    #[serde(default)]
    pub required: bool,
}

/// An ordered set of field descriptors with unique, non-reserved names.
///
/// Empty sets are valid. Invariants are enforced at construction, including
/// during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDescriptor>", into = "Vec<FieldDescriptor>")]
pub struct FieldSet(Vec<FieldDescriptor>);

impl FieldSet {
    /// Build a set from `fields`, checking name invariants.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::ReservedField`] if a name collides with a
    ///   system-injected payload key.
    /// - [`DefinitionError::DuplicateField`] if two descriptors share a name.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if RESERVED_NAMES.contains(&field.name.as_str()) {
                return Err(DefinitionError::ReservedField {
                    name: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DefinitionError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self(fields))
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.0.iter()
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.0.iter().find(|field| field.name == name)
    }

    /// Whether a descriptor named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<FieldDescriptor>> for FieldSet {
    type Error = DefinitionError;

    fn try_from(fields: Vec<FieldDescriptor>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<FieldSet> for Vec<FieldDescriptor> {
    fn from(set: FieldSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn field(name: &str, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_owned(),
            label: name.to_owned(),
            kind,
            placeholder: None,
            required: false,
        }
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for raw in ["short-text", "email", "phone", "long-text"] {
            let kind = FieldKind::from(raw.to_owned());
            assert!(kind.is_recognized(), "{raw} should be recognized");
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn unknown_kind_is_preserved_not_rejected() {
        let kind = FieldKind::from("checkbox".to_owned());
        assert_eq!(kind, FieldKind::Other("checkbox".to_owned()));
        assert!(!kind.is_recognized());
        assert_eq!(kind.as_str(), "checkbox");
    }

    #[test]
    fn kind_deserializes_from_json_string() {
        let kind: FieldKind = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(kind, FieldKind::Email);
        let kind: FieldKind = serde_json::from_str("\"dropdown\"").unwrap();
        assert_eq!(kind, FieldKind::Other("dropdown".to_owned()));
    }

    #[test]
    fn empty_set_is_valid() {
        let set = FieldSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = FieldSet::new(vec![
            field("email", FieldKind::Email),
            field("email", FieldKind::ShortText),
        ])
        .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateField { name } if name == "email"));
    }

    #[test]
    fn reserved_names_rejected() {
        for reserved in RESERVED_NAMES {
            let err = FieldSet::new(vec![field(reserved, FieldKind::ShortText)]).unwrap_err();
            assert!(matches!(err, DefinitionError::ReservedField { name } if name == reserved));
        }
    }

    #[test]
    fn set_deserialization_enforces_invariants() {
        let raw = r#"[
            {"name": "name", "label": "Full Name", "kind": "short-text", "required": true},
            {"name": "name", "label": "Again", "kind": "short-text"}
        ]"#;
        let result: Result<FieldSet, _> = serde_json::from_str(raw);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate field name"));
    }

    #[test]
    fn lookup_by_name() {
        let set = FieldSet::new(vec![
            field("name", FieldKind::ShortText),
            field("message", FieldKind::LongText),
        ])
        .unwrap();
        assert!(set.contains("message"));
        assert!(!set.contains("phone"));
        assert_eq!(set.get("name").unwrap().kind, FieldKind::ShortText);
    }
}
