//! Retry and backoff policy around the inference call.
//!
//! Only throttling is retried. The policy is a linear backoff: the Nth retry
//! waits `N * step`, and at most `max_retries` retries follow the first attempt.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::classify;
pub use error::ClassifyError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
