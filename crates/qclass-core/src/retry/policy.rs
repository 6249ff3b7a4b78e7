use std::time::Duration;

/// Classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Endpoint asked us to slow down.
    Throttled,
    /// Anything else; never retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Linear backoff policy: the Nth retry waits `N * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Backoff increment per retry.
    pub step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            step: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after a failed attempt.
    ///
    /// `retries` is the number of retries already performed (0 after the
    /// first attempt fails).
    pub fn decide(&self, retries: u32, kind: ErrorKind) -> RetryDecision {
        if kind == ErrorKind::Other || retries >= self.max_retries {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.step.saturating_mul(retries + 1))
    }

    /// Total attempts including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
