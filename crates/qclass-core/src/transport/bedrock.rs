//! AWS Bedrock runtime transport (InvokeModel).
//!
//! The SDK is async; a private current-thread tokio runtime drives each call
//! so callers stay synchronous. Credentials come from the SDK default chain.

use anyhow::{Context, Result};
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::config::http::HttpResponse;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use std::time::Duration;
use tokio::runtime::Runtime;

use super::{InferenceTransport, TransportError};

pub struct BedrockTransport {
    runtime: Runtime,
    client: Client,
}

impl BedrockTransport {
    /// Build a client for `region`, resolving credentials from the environment.
    pub fn connect(region: &str, request_timeout: Option<Duration>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("build tokio runtime for bedrock client")?;

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(t) = request_timeout {
            loader = loader.timeout_config(TimeoutConfig::builder().operation_timeout(t).build());
        }
        let sdk_config = runtime.block_on(loader.load());
        let client = Client::new(&sdk_config);

        tracing::debug!(region, ?request_timeout, "bedrock runtime client ready");
        Ok(Self { runtime, client })
    }
}

impl InferenceTransport for BedrockTransport {
    fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let request = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body));

        match self.runtime.block_on(request.send()) {
            Ok(out) => Ok(out.body().as_ref().to_vec()),
            Err(e) => Err(map_sdk_error(e)),
        }
    }
}

/// Service errors keep only the service's own message; anything that never
/// reached the service keeps the full SDK error context.
fn map_sdk_error(e: SdkError<InvokeModelError, HttpResponse>) -> TransportError {
    if e.as_service_error().is_none() {
        return TransportError::Dispatch(DisplayErrorContext(&e).to_string());
    }
    let service = e.into_service_error();
    let text = service.to_string();
    match service {
        InvokeModelError::ThrottlingException(_) => TransportError::Throttled(text),
        _ => TransportError::Service(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_bedrockruntime::types::error::{ThrottlingException, ValidationException};
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    fn response(status: u16) -> HttpResponse {
        HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
    }

    #[test]
    fn throttling_exception_is_throttled() {
        let err = InvokeModelError::ThrottlingException(
            ThrottlingException::builder().message("slow down").build(),
        );
        match map_sdk_error(SdkError::service_error(err, response(429))) {
            TransportError::Throttled(text) => {
                assert!(text.contains("slow down"));
                assert!(!text.contains("SdkBody"), "raw response leaked: {text}");
            }
            other => panic!("expected Throttled, got {other:?}"),
        }
    }

    #[test]
    fn validation_exception_is_service() {
        let err = InvokeModelError::ValidationException(
            ValidationException::builder().message("bad body").build(),
        );
        match map_sdk_error(SdkError::service_error(err, response(400))) {
            TransportError::Service(text) => {
                assert!(text.contains("bad body"));
                assert!(!text.contains("SdkBody"), "raw response leaked: {text}");
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn timeout_is_dispatch() {
        let e: SdkError<InvokeModelError, HttpResponse> =
            SdkError::timeout_error("operation timed out");
        assert!(matches!(map_sdk_error(e), TransportError::Dispatch(_)));
    }
}
