//! Chat completion client for OpenAI-compatible APIs.

use crate::transport::HttpTransport;
use crate::{conversions, endpoint};
use derive_builder::Builder;
use derive_getters::Getters;
use fstk_core::{ChatCompletionRequest, ChatCompletionResponse, ModelInfo};
use fstk_error::ChatError;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default base address of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Conventional default model identifier; not enforced by the client.
pub const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Client configuration, immutable for the lifetime of a client.
#[derive(Debug, Clone, Getters, Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// API key sent as a bearer token
    api_key: String,
    /// Base address of the deployment, e.g. `https://api.openai.com/v1`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl ClientConfig {
    /// Creates a configuration from an API key and base address.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Creates a builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Client for any OpenAI-compatible chat completion API.
///
/// Holds only immutable configuration, so a single client is safe to share
/// across concurrent calls without locking; each call is self-contained.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl ChatCompletionClient {
    /// Creates a client with the default transport timeouts.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ClientConfig) -> Result<Self, ChatError> {
        let transport = HttpTransport::new()?;
        debug!("created chat completion client");
        Ok(Self { config, transport })
    }

    /// Creates a client over an explicitly configured transport.
    pub fn with_transport(config: ClientConfig, transport: HttpTransport) -> Self {
        Self { config, transport }
    }

    /// Returns the configured base address.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Performs one chat completion exchange.
    ///
    /// The pipeline is serialize, resolve, transport, decode, and it
    /// short-circuits on the first failing stage. No stage is retried.
    ///
    /// # Errors
    ///
    /// Returns an error classifying what failed: a malformed base address,
    /// a timeout or connection failure, a non-200 status (with the body
    /// preserved), or an undecodable response body.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ChatError> {
        self.chat_with_deadline(request, None).await
    }

    /// Performs one chat completion exchange under an external deadline.
    ///
    /// The deadline replaces the transport's own request deadline for this
    /// call, so callers composing cancellation can bound the whole exchange.
    pub async fn chat_with_deadline(
        &self,
        request: &ChatCompletionRequest,
        deadline: Option<Duration>,
    ) -> Result<ChatCompletionResponse, ChatError> {
        let chat_request = conversions::to_chat_request(request);
        let endpoint = endpoint::resolve_chat(self.config.base_url())?;

        debug!(
            url = %endpoint.url(),
            message_count = chat_request.messages().len(),
            "sending chat completion request"
        );

        let exchange = self
            .transport
            .post(&endpoint.url(), self.config.api_key(), &chat_request, deadline)
            .await?;

        let status = *exchange.status();
        if status != 200 {
            error!(status, "chat completion request rejected");
            return Err(ChatError::http_status(status, exchange.body().clone()));
        }

        conversions::from_response_body(exchange.body())
    }

    /// Lists the models the deployment serves.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`chat`](Self::chat).
    #[instrument(skip(self))]
    pub async fn models(&self) -> Result<Vec<ModelInfo>, ChatError> {
        let endpoint = endpoint::resolve_models(self.config.base_url())?;

        let exchange = self
            .transport
            .get(&endpoint.url(), self.config.api_key(), None)
            .await?;

        let status = *exchange.status();
        if status != 200 {
            error!(status, "model listing request rejected");
            return Err(ChatError::http_status(status, exchange.body().clone()));
        }

        conversions::from_models_body(exchange.body())
    }
}
