//! Validation schema derivation and single-pass payload checking.
//!
//! A [`ValidationSchema`] is derived from a [`FieldSet`] by a fixed match
//! on [`FieldKind`] — no reflection, no runtime schema language. Derivation
//! is deterministic: the same field set always yields a schema with the
//! same pass/fail behavior on any payload.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::descriptor::{FieldKind, FieldSet};
use crate::error::{FieldIssue, ValidationErrors};

/// `user@domain.tld` — a local part, `@`, and a dotted domain.
#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD` — two-digit area code,
/// four-or-five-digit prefix, four-digit suffix.
#[allow(clippy::unwrap_used)]
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").unwrap());

/// Format constraint applied to a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Presence only.
    None,
    /// Must match the e-mail grammar.
    Email,
    /// Must match the phone grammar.
    Phone,
}

/// Derived rule for a single field.
#[derive(Debug, Clone)]
struct FieldRule {
    name: String,
    label: String,
    required: bool,
    format: Format,
}

impl FieldRule {
    /// Check one candidate value. Empty means absent: required fields fail
    /// with a "required" message, optional fields pass without any format
    /// check.
    fn check(&self, value: &str) -> Option<FieldIssue> {
        if value.trim().is_empty() {
            if self.required {
                return Some(FieldIssue::new(
                    &self.name,
                    format!("{} is required", self.label),
                ));
            }
            return None;
        }

        match self.format {
            Format::None => None,
            Format::Email => (!EMAIL.is_match(value))
                .then(|| FieldIssue::new(&self.name, "invalid email")),
            Format::Phone => (!PHONE.is_match(value))
                .then(|| FieldIssue::new(&self.name, "invalid phone number")),
        }
    }
}

/// A validation schema derived from a field descriptor set.
///
/// Built once per form instance; validates a full candidate payload in one
/// pass, reporting per-field issues in descriptor order.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    rules: Vec<FieldRule>,
}

impl ValidationSchema {
    /// Derive a rule for every descriptor in `fields`, in order.
    ///
    /// Unrecognized kinds fall back to plain text; each one is logged so a
    /// content typo is visible without hard-failing the whole form.
    #[must_use]
    pub fn derive(fields: &FieldSet) -> Self {
        let rules = fields
            .iter()
            .map(|field| {
                let format = match &field.kind {
                    FieldKind::Email => Format::Email,
                    FieldKind::Phone => Format::Phone,
                    FieldKind::ShortText | FieldKind::LongText => Format::None,
                    FieldKind::Other(kind) => {
                        warn!(
                            field = %field.name,
                            kind = %kind,
                            "unrecognized field kind, validating as plain text"
                        );
                        Format::None
                    }
                };
                FieldRule {
                    name: field.name.clone(),
                    label: field.label.clone(),
                    required: field.required,
                    format,
                }
            })
            .collect();
        Self { rules }
    }

    /// Check a full candidate payload in one pass.
    ///
    /// Values are looked up by field name; fields absent from `values` are
    /// treated as empty. Keys in `values` without a matching rule are
    /// ignored here; the controller rejects them before they are staged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] with one issue per failing field, in
    /// descriptor order.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> Result<(), ValidationErrors> {
        let issues: Vec<FieldIssue> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let value = values.get(&rule.name).map_or("", String::as_str);
                rule.check(value)
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { issues })
        }
    }

    /// Number of derived rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the schema has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
