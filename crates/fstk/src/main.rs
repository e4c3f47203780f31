//! fstk - CLI tool for chat completion.

use clap::Parser;
use fstk::cli::{self, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Set { chat_model } => cli::handle_set_command(&chat_model)?,
        Commands::Get { key } => cli::handle_get_command(&key)?,
        Commands::Chat {
            prompt,
            model,
            system,
        } => cli::handle_chat_command(prompt, model, system).await?,
        Commands::Models => cli::handle_models_command().await?,
    }

    Ok(())
}
