//! Invento command-line entry point.

use anyhow::Result;
use clap::Parser;
use invento_app::AppConfig;
use invento_effects::FilesystemStorageHandler;
use invento_terminal::{Cli, CliHandler};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(Some(cli.config.as_path()))?;
    tracing::debug!(storage_dir = %config.storage_dir.display(), "loaded configuration");

    let storage = FilesystemStorageHandler::new(&config.storage_dir);
    let mut handler = CliHandler::new(&config, storage)?;
    handler.dispatch(cli.command, &mut std::io::stdout()).await
}
