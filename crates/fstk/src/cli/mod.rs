//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fstk
//! binary.

mod chat;
mod commands;
mod settings;

pub use chat::{handle_chat_command, handle_models_command};
pub use commands::{Cli, Commands};
pub use settings::{handle_get_command, handle_set_command};
