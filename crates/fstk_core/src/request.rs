//! Chat completion request type.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A chat completion request.
///
/// `model`, `messages`, and `stream` are always present. The sampling
/// parameters are each independently optional and are omitted from the wire
/// payload when unset, never serialized as `null` or a sentinel.
///
/// # Examples
///
/// ```
/// use fstk_core::{ChatCompletionRequest, Message, Role};
///
/// let request = ChatCompletionRequest::builder()
///     .model("gpt-5-nano")
///     .messages(vec![Message::new(Role::User, "hi")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gpt-5-nano");
/// assert!(!request.stream());
/// assert!(request.temperature().is_none());
/// ```
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
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages, in conversation order
    messages: Vec<Message>,
    /// Whether to request a streamed response
    #[builder(default)]
    #[serde(default)]
    stream: bool,
    /// Sampling temperature
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Number of candidate completions
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<f32>,
    /// Upper bound on generated tokens
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Returns a builder for constructing a ChatCompletionRequest.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}
