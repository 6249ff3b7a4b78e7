//! Classify transport errors into retry policy error kinds.

use crate::retry::policy::ErrorKind;
use crate::transport::TransportError;

/// Map a transport error onto the retry taxonomy.
///
/// Throttling is recognised from the transport's typed variant, never from
/// the error text.
pub fn classify(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Throttled(_) => ErrorKind::Throttled,
        TransportError::Service(_) | TransportError::Dispatch(_) => ErrorKind::Other,
    }
}
