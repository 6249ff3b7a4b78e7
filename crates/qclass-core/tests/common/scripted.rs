//! In-process transport that replays a fixed script of responses.
//!
//! Each `invoke` pops the next scripted outcome and records the request so
//! tests can assert on call count, order, and body.

#![allow(dead_code)]

use qclass_core::transport::{InferenceTransport, TransportError};
use std::cell::RefCell;
use std::collections::VecDeque;

pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<Vec<u8>, TransportError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model_id: String,
    pub body: serde_json::Value,
}

impl RecordedCall {
    /// The prompt text of the single user message.
    pub fn prompt(&self) -> &str {
        self.body["messages"][0]["content"].as_str().unwrap()
    }
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<Vec<u8>, TransportError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl InferenceTransport for ScriptedTransport {
    fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        self.calls.borrow_mut().push(RecordedCall {
            model_id: model_id.to_string(),
            body: serde_json::from_slice(&body).expect("request body is JSON"),
        });
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Dispatch("script exhausted".into())))
    }
}

/// Bedrock-style response body with one text block.
pub fn text_reply(text: &str) -> Result<Vec<u8>, TransportError> {
    let body = serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    });
    Ok(serde_json::to_vec(&body).unwrap())
}

pub fn throttled() -> Result<Vec<u8>, TransportError> {
    Err(TransportError::Throttled(
        "ThrottlingException: Too many requests, please wait before trying again.".into(),
    ))
}
