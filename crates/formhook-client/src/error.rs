//! Error types for the delivery layer.

/// All errors that can occur configuring or performing a delivery.
///
/// The controller collapses every variant into the single configured
/// user-facing error message; the concrete variant is only logged for
/// operator diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Missing or invalid delivery configuration.
    #[error("webhook config error: {0}")]
    Config(String),

    /// The endpoint answered with a status outside the success range.
    #[error("webhook endpoint returned HTTP {status}")]
    Endpoint {
        /// HTTP status code from the endpoint.
        status: u16,
    },

    /// The request did not resolve within the configured timeout.
    #[error("webhook request timed out")]
    Timeout,

    /// Transport-level failure reaching the endpoint.
    #[error("webhook network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload serialization failed. Should not occur for well-formed
    /// payloads — values and system fields are all strings.
    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
