//! Data transfer objects for the OpenAI chat completions wire format.

use derive_builder::Builder;
use derive_getters::Getters;
use fstk_core::Role;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender role, one of the closed role set
    pub role: Role,
    /// Message content
    pub content: String,
}

/// OpenAI chat completion request payload.
///
/// `model`, `stream`, and `messages` are always emitted. Each sampling
/// parameter key appears only when its value is present.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    pub(crate) model: String,
    /// Whether a streamed response is requested
    pub(crate) stream: bool,
    /// Conversation messages, in conversation order
    pub(crate) messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) top_p: Option<f32>,
    /// Number of candidate completions
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) n: Option<f32>,
    /// Upper bound on generated tokens
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_completion_tokens: Option<u32>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A choice in the OpenAI response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The reply message
    pub message: ChatMessage,
    /// Reason the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
///
/// Each count is independently optional; presence of one key does not imply
/// presence of another.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<f64>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<f64>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<f64>,
}

/// OpenAI chat completion response payload.
///
/// A body without `choices` decodes to an empty choice list; a body without
/// `usage` decodes with no token counts. Neither absence is an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// Model listing response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsResponse {
    /// Listed models
    #[serde(default)]
    pub data: Vec<ModelEntry>,
}

/// One model in a listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    /// Model identifier
    pub id: String,
}
