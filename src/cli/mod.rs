//! Command-line front end.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::item::ItemCommands;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "Manage a to-do list backed by SQLite")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .todolist/
    #[arg(short, long, global = true, env = "TODOLIST_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Item(ItemCommands),

    /// Levenshtein distance between two strings
    Distance {
        source: String,
        target: String,
    },
}

/// Print an error in the requested format and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
