//! Chat completion response type.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A decoded chat completion response.
///
/// Token counts are reported by the service for usage accounting; each one
/// is independently optional and presence of one does not imply presence of
/// another.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatCompletionResponse {
    /// Candidate reply messages, in the order the service returned them
    messages: Vec<Message>,
    /// Tokens in the generated completion
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion_tokens: Option<f64>,
    /// Tokens in the prompt
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prompt_tokens: Option<f64>,
    /// Total tokens consumed
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_tokens: Option<f64>,
}

impl ChatCompletionResponse {
    /// Creates a new response from its parts.
    pub fn new(
        messages: Vec<Message>,
        completion_tokens: Option<f64>,
        prompt_tokens: Option<f64>,
        total_tokens: Option<f64>,
    ) -> Self {
        Self {
            messages,
            completion_tokens,
            prompt_tokens,
            total_tokens,
        }
    }

    /// Returns a builder for constructing a ChatCompletionResponse.
    pub fn builder() -> ChatCompletionResponseBuilder {
        ChatCompletionResponseBuilder::default()
    }
}
