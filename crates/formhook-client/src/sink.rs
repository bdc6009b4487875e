//! Webhook delivery.
//!
//! One `POST` per submission attempt — no retry, no queueing. A failed
//! delivery is reported back and retried only by an explicit new attempt.

use reqwest::StatusCode;
use tracing::debug;

use formhook_core::SubmissionPayload;

use crate::config::WebhookConfig;
use crate::error::DeliveryError;

/// Delivers submission payloads to a configured webhook endpoint.
///
/// Holds one HTTP client with the configured timeout baked in; cloning the
/// sink shares the client.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    url: String,
    source: String,
    client: reqwest::Client,
}

impl WebhookSink {
    /// Build a sink from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &WebhookConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("formhook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DeliveryError::Network)?;

        Ok(Self {
            url: config.url.clone(),
            source: config.source.clone(),
            client,
        })
    }

    /// The source tag stamped onto payloads sent through this sink.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The endpoint this sink posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `POST` the payload as JSON to the configured endpoint.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::Endpoint`] for any non-success status.
    /// - [`DeliveryError::Timeout`] when the configured timeout elapses.
    /// - [`DeliveryError::Network`] for other transport failures.
    pub async fn deliver(&self, payload: &SubmissionPayload) -> Result<StatusCode, DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::Network(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "submission delivered");
            Ok(status)
        } else {
            Err(DeliveryError::Endpoint {
                status: status.as_u16(),
            })
        }
    }
}
