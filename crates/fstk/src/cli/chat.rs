//! Chat command handlers.

use crate::AppConfig;
use fstk_client::{ChatCompletionClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use fstk_core::{ChatCompletionRequest, Message, Role};
use fstk_error::{ConfigError, FstkResult};
use tracing::debug;

/// Handles the chat command.
///
/// Model selection order: the `--model` override, then the stored
/// `chatModel`, then the conventional default.
#[tracing::instrument(skip(prompt, system))]
pub async fn handle_chat_command(
    prompt: String,
    model: Option<String>,
    system: Option<String>,
) -> FstkResult<()> {
    let stored = AppConfig::load()?;
    let model = model
        .or_else(|| stored.chat_model().clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(Message::new(Role::System, system));
    }
    messages.push(Message::new(Role::User, prompt));

    let request = ChatCompletionRequest::builder()
        .model(model)
        .messages(messages)
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build request: {e}")))?;

    let client = client_from_env()?;
    let response = client.chat(&request).await?;

    debug!(
        completion_tokens = ?response.completion_tokens(),
        prompt_tokens = ?response.prompt_tokens(),
        total_tokens = ?response.total_tokens(),
        "chat completion usage"
    );

    for message in response.messages() {
        println!("{}", message.content());
    }
    Ok(())
}

/// Handles the models command.
#[tracing::instrument]
pub async fn handle_models_command() -> FstkResult<()> {
    let client = client_from_env()?;

    for model in client.models().await? {
        println!("{}", model.id());
    }
    Ok(())
}

/// Builds a client from the process environment.
///
/// The API key comes from FSTK_API_KEY (falling back to OPENAI_API_KEY);
/// the base address from FSTK_BASE_URL when set.
fn client_from_env() -> FstkResult<ChatCompletionClient> {
    let api_key = std::env::var("FSTK_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .map_err(|_| ConfigError::new("FSTK_API_KEY or OPENAI_API_KEY must be set"))?;
    let base_url =
        std::env::var("FSTK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let config = ClientConfig::new(api_key, base_url);
    Ok(ChatCompletionClient::new(config)?)
}
