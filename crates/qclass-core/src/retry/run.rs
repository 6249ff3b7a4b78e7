//! Retry loop: run a closure until success or policy says stop.

use std::time::Duration;

use super::classify;
use super::error::ClassifyError;
use super::policy::{ErrorKind, RetryDecision, RetryPolicy};
use crate::transport::TransportError;

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// `f` receives the number of retries performed so far. On a retryable
/// failure `sleep` is called with the backoff delay before the next attempt.
pub fn run_with_retry<T, F, S>(policy: &RetryPolicy, mut sleep: S, mut f: F) -> Result<T, ClassifyError>
where
    F: FnMut(u32) -> Result<T, TransportError>,
    S: FnMut(Duration),
{
    let mut retries = 0u32;
    loop {
        match f(retries) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(retries, kind) {
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            retry = retries + 1,
                            max_retries = policy.max_retries,
                            delay_secs = d.as_secs_f64(),
                            "throttled: {}; backing off",
                            e
                        );
                        sleep(d);
                        retries += 1;
                    }
                    RetryDecision::NoRetry => {
                        return Err(match kind {
                            ErrorKind::Throttled => {
                                tracing::warn!(
                                    attempts = retries + 1,
                                    max_attempts = policy.max_attempts(),
                                    "still throttled; giving up"
                                );
                                ClassifyError::RetriesExhausted {
                                    attempts: retries + 1,
                                    source: e,
                                }
                            }
                            ErrorKind::Other => ClassifyError::Transport(e),
                        });
                    }
                }
            }
        }
    }
}
