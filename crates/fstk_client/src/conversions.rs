//! Type conversions between fstk and OpenAI wire formats.

use crate::dto::{ChatMessage, ChatRequest, ChatResponse, ChatUsage, ModelsResponse};
use fstk_core::{ChatCompletionRequest, ChatCompletionResponse, Message, ModelInfo};
use fstk_error::ChatError;

/// Converts a ChatCompletionRequest to the OpenAI wire payload.
///
/// Pure and infallible: the input is assumed already valid, message order is
/// preserved, and absent sampling parameters produce no key at all.
pub fn to_chat_request(req: &ChatCompletionRequest) -> ChatRequest {
    let messages = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: *msg.role(),
            content: msg.content().clone(),
        })
        .collect();

    ChatRequest {
        model: req.model().clone(),
        stream: *req.stream(),
        messages,
        temperature: *req.temperature(),
        top_p: *req.top_p(),
        n: *req.n(),
        max_completion_tokens: *req.max_completion_tokens(),
    }
}

/// Decodes a raw response body into a ChatCompletionResponse.
///
/// A body without `choices` yields an empty message list; a body without
/// `usage` yields all token counts absent. Each usage count maps
/// independently. Fails only when the body is not valid JSON or a present
/// `choices[i].message` entry is incomplete.
pub fn from_response_body(body: &str) -> Result<ChatCompletionResponse, ChatError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::decode(format!("invalid chat completion body: {e}")))?;

    Ok(from_chat_response(&response))
}

/// Converts a parsed OpenAI response to a ChatCompletionResponse.
pub fn from_chat_response(response: &ChatResponse) -> ChatCompletionResponse {
    let messages = response
        .choices
        .iter()
        .map(|choice| Message::new(choice.message.role, choice.message.content.clone()))
        .collect();

    let ChatUsage {
        prompt_tokens,
        completion_tokens,
        total_tokens,
    } = response.usage.clone().unwrap_or_default();

    ChatCompletionResponse::new(messages, completion_tokens, prompt_tokens, total_tokens)
}

/// Decodes a raw model listing body into model entries.
pub fn from_models_body(body: &str) -> Result<Vec<ModelInfo>, ChatError> {
    let response: ModelsResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::decode(format!("invalid model listing body: {e}")))?;

    Ok(response
        .data
        .into_iter()
        .map(|entry| ModelInfo::new(entry.id))
        .collect())
}
