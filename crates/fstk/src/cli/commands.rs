//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Command-line arguments for the fstk binary.
#[derive(Parser, Debug)]
#[command(name = "fstk")]
#[command(about = "fstk - CLI tool for chat completion")]
#[command(version)]
pub struct Cli {
    /// Print extra debug info
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of the fstk binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set configuration values
    Set {
        /// Chat model to use (e.g., gpt-4o)
        #[arg(long = "chatModel")]
        chat_model: String,
    },
    /// Get configuration values
    Get {
        /// Configuration key to retrieve
        key: String,
    },
    /// Send one chat completion and print the reply
    Chat {
        /// The user prompt
        prompt: String,
        /// Model override for this call
        #[arg(long)]
        model: Option<String>,
        /// Optional system prompt
        #[arg(long)]
        system: Option<String>,
    },
    /// List models served by the configured endpoint
    Models,
}
