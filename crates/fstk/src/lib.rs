//! Unified interface for the fstk chat completion client.
//!
//! Re-exports the core types, client, and error types, and provides the
//! persistent CLI configuration and command handlers used by the fstk
//! binary.

pub mod cli;
mod config;

pub use config::AppConfig;

pub use fstk_client::{ChatCompletionClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fstk_core::{
    ChatCompletionRequest, ChatCompletionResponse, Message, ModelInfo, Role,
};
pub use fstk_error::{ChatError, ChatErrorKind, ConfigError, FstkError, FstkResult};
