//! Delivery layer for `formhook`.
//!
//! Wires a [`formhook_core`] form definition to a webhook endpoint: derives
//! the validation schema, stages user input, and drives each submission
//! through the idle → submitting → success/error feedback lifecycle with a
//! single JSON `POST` per attempt.
//!
//! # Example
//!
//! ```rust,no_run
//! use formhook_client::{SubmissionController, WebhookConfig, WebhookSink};
//! use formhook_core::FormDefinition;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let definition = FormDefinition::from_json(
//!     r#"{
//!         "fields": [
//!             {"name": "email", "label": "E-mail", "kind": "email", "required": true}
//!         ],
//!         "success_message": "Thanks! We'll be in touch.",
//!         "error_message": "Something went wrong. Please try again."
//!     }"#,
//! )?;
//!
//! let sink = WebhookSink::new(&WebhookConfig::from_env()?)?;
//! let mut form = SubmissionController::new(&definition, sink);
//! form.set_value("email", "ana@example.com")?;
//! let outcome = form.submit().await;
//! println!("{:?}", form.state());
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

mod config;
mod controller;
mod error;
mod sink;

pub use config::WebhookConfig;
pub use controller::{SubmissionController, SubmitOutcome, UnknownField};
pub use error::DeliveryError;
pub use sink::WebhookSink;

use std::time::Duration;

/// Environment variable naming the webhook endpoint URL.
pub const ENV_WEBHOOK_URL: &str = "FORMHOOK_WEBHOOK_URL";
/// Environment variable overriding the payload source tag.
pub const ENV_SOURCE: &str = "FORMHOOK_SOURCE";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FORMHOOK_TIMEOUT_SECS";

/// Source tag stamped onto payloads when none is configured.
pub const DEFAULT_SOURCE: &str = "formhook";
/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
