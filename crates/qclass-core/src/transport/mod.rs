//! Outbound inference transport.
//!
//! `InferenceTransport` is the seam between the classification call and the
//! hosted endpoint: one blocking request in, raw response body out.

mod bedrock;

pub use bedrock::BedrockTransport;

use thiserror::Error;

/// Failure of a single invoke attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint rejected the request because of rate limiting.
    #[error("throttled: {0}")]
    Throttled(String),
    /// Endpoint answered with any other service error (auth, validation, model error, ...).
    #[error("service error: {0}")]
    Service(String),
    /// Request never got a service answer (connect, timeout, credentials, runtime).
    #[error("dispatch failure: {0}")]
    Dispatch(String),
}

/// A blocking client for a hosted model endpoint.
pub trait InferenceTransport {
    /// Send `body` (JSON) to `model_id` and return the raw response body.
    fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}

impl<T: InferenceTransport + ?Sized> InferenceTransport for &T {
    fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        (**self).invoke(model_id, body)
    }
}
