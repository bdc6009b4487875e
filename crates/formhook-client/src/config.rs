//! Webhook delivery configuration.
//!
//! Loads from environment variables. The endpoint URL is mandatory: an
//! unset URL is a configuration error, never a placeholder endpoint, so a
//! misconfigured deployment fails loudly instead of posting into the void.

use std::time::Duration;

use crate::error::DeliveryError;
use crate::{DEFAULT_SOURCE, DEFAULT_TIMEOUT, ENV_SOURCE, ENV_TIMEOUT_SECS, ENV_WEBHOOK_URL};

/// Configuration for a [`WebhookSink`](crate::WebhookSink).
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Endpoint that receives submission payloads.
    pub url: String,
    /// Origin tag injected into every payload.
    pub source: String,
    /// Request timeout. The call either resolves or fails within this.
    pub timeout: Duration,
}

impl WebhookConfig {
    /// Build a config for `url` with the default source tag and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Config`] if `url` is empty or blank.
    pub fn new(url: impl Into<String>) -> Result<Self, DeliveryError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DeliveryError::Config(format!(
                "missing webhook URL — set {ENV_WEBHOOK_URL} or pass a URL explicitly"
            )));
        }
        Ok(Self {
            url,
            source: DEFAULT_SOURCE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FORMHOOK_WEBHOOK_URL` — endpoint URL (required)
    /// - `FORMHOOK_SOURCE` — payload source tag (default: `formhook`)
    /// - `FORMHOOK_TIMEOUT_SECS` — request timeout in seconds (default: `10`)
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Config`] when the URL variable is unset or
    /// blank.
    pub fn from_env() -> Result<Self, DeliveryError> {
        let mut config = Self::new(std::env::var(ENV_WEBHOOK_URL).unwrap_or_default())?;

        if let Ok(source) = std::env::var(ENV_SOURCE) {
            if !source.trim().is_empty() {
                config.source = source;
            }
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = raw.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        Ok(config)
    }

    /// Override the payload source tag.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
