//! Configuration command handlers.

use crate::AppConfig;
use fstk_error::FstkResult;
use tracing::info;

/// Handles the set command.
#[tracing::instrument]
pub fn handle_set_command(chat_model: &str) -> FstkResult<()> {
    let path = AppConfig::default_path()?;
    let mut config = if path.exists() {
        AppConfig::from_file(&path)?
    } else {
        AppConfig::default()
    };

    config.set_chat_model(chat_model);
    config.save(&path)?;

    info!(path = %path.display(), "configuration updated");
    println!("Configuration updated:");
    println!("  chatModel = {chat_model}");
    Ok(())
}

/// Handles the get command.
pub fn handle_get_command(key: &str) -> FstkResult<()> {
    let config = AppConfig::load()?;

    match config.get(key) {
        Some(value) => println!("{value}"),
        None => println!("No value stored for key: {key}"),
    }
    Ok(())
}
