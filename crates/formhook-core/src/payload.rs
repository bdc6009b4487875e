//! The outbound submission payload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The JSON document delivered to the webhook.
///
/// Field values are flattened to top-level keys; `timestamp` and `source`
/// are injected by the pipeline (descriptor names are checked against them
/// at definition time). Built at submit time and discarded once the
/// delivery resolves; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    /// Entered values keyed by field name.
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
    /// Submission time, ISO-8601 UTC.
    pub timestamp: DateTime<Utc>,
    /// Constant tag identifying the origin application.
    pub source: String,
}

impl SubmissionPayload {
    /// Stamp `values` with the current time and the given source tag.
    #[must_use]
    pub fn assemble(values: BTreeMap<String, String>, source: impl Into<String>) -> Self {
        Self {
            values,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }
}
