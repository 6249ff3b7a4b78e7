//! JSON request/response bodies for the Anthropic messages format on Bedrock.

use serde::{Deserialize, Serialize};

use crate::retry::ClassifyError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagesRequest<'a> {
    pub anthropic_version: &'a str,
    pub messages: Vec<Message<'a>>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    /// Single user-turn request.
    pub fn user(anthropic_version: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            anthropic_version,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>, ClassifyError> {
        serde_json::to_vec(self).map_err(ClassifyError::Encode)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl MessagesResponse {
    pub fn from_body(body: &[u8]) -> Result<Self, ClassifyError> {
        serde_json::from_slice(body).map_err(ClassifyError::MalformedResponse)
    }

    /// Text of the first content block; later blocks are ignored.
    pub fn first_text(&self) -> Result<&str, ClassifyError> {
        self.content
            .first()
            .map(|b| b.text.as_str())
            .ok_or(ClassifyError::EmptyResponse)
    }
}
