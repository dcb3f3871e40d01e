//! Todolist CLI entry point.

use anyhow::Context;
use clap::Parser;

use todolist::cli::{Cli, Commands};
use todolist::infrastructure::logging::LoggerImpl;
use todolist::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command, cli.config.as_deref(), cli.json).await {
        todolist::cli::handle_error(err, cli.json);
    }
}

async fn run(command: Commands, config_path: Option<&std::path::Path>, json_mode: bool) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;

    match command {
        Commands::Item(command) => todolist::cli::commands::item::execute(command, &config, json_mode).await,
        Commands::Distance { source, target } => {
            todolist::cli::commands::distance::execute(source, target, json_mode);
            Ok(())
        }
    }
}
