//! The classification call: prompt, invoke, retry on throttling, normalize.

use std::fmt;
use std::time::Duration;

use crate::config::ClassifierConfig;
use crate::prompt::build_prompt;
use crate::retry::{run_with_retry, ClassifyError, RetryPolicy};
use crate::transport::InferenceTransport;
use crate::wire::{MessagesRequest, MessagesResponse};

/// The two labels the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Simple,
    Complex,
}

/// Normalized model output: trimmed and lowercased.
///
/// Any text is accepted; `label()` reports whether it is one of the two
/// expected answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification(String);

impl Classification {
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> Option<Label> {
        match self.0.as_str() {
            "simple" => Some(Label::Simple),
            "complex" => Some(Label::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type Sleeper = Box<dyn Fn(Duration)>;

/// Request parameters shared by every call.
#[derive(Debug, Clone)]
struct RequestParams {
    model_id: String,
    anthropic_version: String,
    max_tokens: u32,
}

/// Classifies queries through an `InferenceTransport`.
pub struct Classifier<T> {
    transport: T,
    params: RequestParams,
    policy: RetryPolicy,
    sleeper: Sleeper,
}

impl<T: InferenceTransport> Classifier<T> {
    pub fn new(transport: T, cfg: &ClassifierConfig) -> Self {
        Self {
            transport,
            params: RequestParams {
                model_id: cfg.model_id.clone(),
                anthropic_version: cfg.anthropic_version.clone(),
                max_tokens: cfg.max_tokens,
            },
            policy: cfg.retry_policy(),
            sleeper: Box::new(std::thread::sleep),
        }
    }

    /// Replace the backoff sleep (blocking `thread::sleep` by default).
    pub fn with_sleeper(mut self, sleeper: impl Fn(Duration) + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Classify one query.
    ///
    /// Throttling is retried per the policy; every other failure, and
    /// throttling past the last retry, is returned as a fatal error.
    pub fn classify(&self, query: &str) -> Result<Classification, ClassifyError> {
        let prompt = build_prompt(query);
        let body = MessagesRequest::user(
            &self.params.anthropic_version,
            &prompt,
            self.params.max_tokens,
        )
        .to_body()?;

        let raw = run_with_retry(&self.policy, |d| (self.sleeper)(d), |retries| {
            tracing::debug!(
                model_id = %self.params.model_id,
                attempt = retries + 1,
                "invoking model"
            );
            self.transport.invoke(&self.params.model_id, body.clone())
        })
        .map_err(|e| {
            tracing::error!("classification failed: {e:#}");
            e
        })?;

        let response = MessagesResponse::from_body(&raw)?;
        let classification = Classification::from_raw(response.first_text()?);
        if classification.label().is_none() {
            tracing::warn!(
                output = classification.as_str(),
                "model returned an unexpected label; passing it through"
            );
        }
        tracing::info!(label = classification.as_str(), "classified query");
        Ok(classification)
    }
}
