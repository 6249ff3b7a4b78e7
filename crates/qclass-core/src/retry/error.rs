//! Fatal outcomes of a classification call.

use crate::transport::TransportError;
use thiserror::Error;

/// Error returned by a classification call once retrying is over.
///
/// Every variant is fatal to the call; throttling that recovered within the
/// retry budget never surfaces here.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Non-throttling transport failure (auth, validation, network, ...). Not retried.
    #[error(transparent)]
    Transport(TransportError),
    /// Throttling persisted through every allowed attempt.
    #[error("still throttled after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: TransportError,
    },
    /// Request body could not be serialized.
    #[error("encode request body")]
    Encode(#[source] serde_json::Error),
    /// Response body was not the expected JSON shape.
    #[error("malformed response body")]
    MalformedResponse(#[source] serde_json::Error),
    /// Response parsed but carried no content blocks.
    #[error("response contained no content blocks")]
    EmptyResponse,
}
