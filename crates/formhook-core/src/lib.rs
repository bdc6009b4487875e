//! Core library for `formhook`.
//!
//! Contains the field descriptor model, form definitions, validation schema
//! derivation, the outbound submission payload, and the feedback state
//! machine. This crate is pure logic — it performs no I/O and knows nothing
//! about how submissions are delivered or rendered.

pub mod definition;
pub mod descriptor;
pub mod error;
pub mod feedback;
pub mod payload;
pub mod schema;

pub use definition::FormDefinition;
pub use descriptor::{FieldDescriptor, FieldKind, FieldSet};
pub use error::{DefinitionError, FieldIssue, ValidationErrors};
pub use feedback::{FeedbackState, FeedbackStatus};
pub use payload::SubmissionPayload;
pub use schema::ValidationSchema;
