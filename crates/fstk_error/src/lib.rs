//! Error types for the fstk chat completion client.
//!
//! Every stage of a chat completion call reports its outcome as an explicit
//! success-or-failure value; nothing is retried or silently discarded.

mod chat;
mod config;

pub use chat::{ChatError, ChatErrorKind};
pub use config::ConfigError;

/// Top-level error type composing the per-domain errors.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum FstkError {
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Chat completion error
    #[display("{}", _0)]
    Chat(ChatError),
}

impl std::error::Error for FstkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FstkError::Config(err) => Some(err),
            FstkError::Chat(err) => Some(err),
        }
    }
}

/// Result alias for fallible fstk operations.
pub type FstkResult<T> = Result<T, FstkError>;
