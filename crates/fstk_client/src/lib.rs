//! OpenAI-compatible chat completion client.
//!
//! This crate turns a structured chat completion request into a single HTTP
//! exchange and decodes the reply into a structured response. The pipeline
//! is serialize, resolve, transport, decode, short-circuiting on the first
//! failure. Streaming, retries, and connection pooling are caller
//! responsibilities layered on top.

mod client;
mod conversions;
mod dto;
mod endpoint;
mod transport;

pub use client::{
    ChatCompletionClient, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use conversions::{from_chat_response, from_models_body, from_response_body, to_chat_request};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
pub use endpoint::{
    CHAT_COMPLETIONS_PATH, Endpoint, MODELS_PATH, resolve_chat, resolve_models,
};
pub use transport::{
    DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT, HttpResponse, HttpTransport,
};
