//! Item CLI commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::sync::Arc;

use crate::adapters::cache::CachedItemStore;
use crate::adapters::sqlite::{initialize_database, PoolConfig, SqliteItemRepository};
use crate::cli::output::{list_table, output, render_list, CommandOutput};
use crate::domain::errors::DomainError;
use crate::domain::models::{Config, Item, NewItem};
use crate::domain::ports::ItemRepository;

/// Item subcommands.
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List all items
    List,
    /// Show a single item
    Show {
        /// Item ID
        id: i64,
    },
    /// Add a new item
    Add {
        /// Item text
        text: String,
        /// Mark the item as already completed
        #[arg(long)]
        completed: bool,
    },
    /// Replace the text and completion flag of an item
    Update {
        /// Item ID
        id: i64,
        /// New item text
        text: String,
        /// Mark the item as completed
        #[arg(long)]
        completed: bool,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },
    /// Find items whose text contains a term, ignoring case
    Search {
        /// Search term
        term: String,
    },
}

/// Item as rendered by the CLI.
#[derive(Debug, serde::Serialize)]
pub struct ItemOutput {
    pub id: i64,
    pub text: String,
    pub is_completed: bool,
}

impl From<&Item> for ItemOutput {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            is_completed: item.is_completed,
        }
    }
}

/// Result of `list` and `search`.
#[derive(Debug, serde::Serialize)]
pub struct ItemListOutput {
    pub items: Vec<ItemOutput>,
    pub total: usize,
}

impl ItemListOutput {
    fn new(items: &[Item]) -> Self {
        Self {
            total: items.len(),
            items: items.iter().map(ItemOutput::from).collect(),
        }
    }
}

impl CommandOutput for ItemListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["id", "done", "text"]);
        for item in &self.items {
            table.add_row(vec![
                item.id.to_string(),
                if item.is_completed { "x" } else { " " }.to_string(),
                item.text.clone(),
            ]);
        }
        render_list("item", &table, self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Result of `show`, `add`, `update` and `delete`.
#[derive(Debug, serde::Serialize)]
pub struct ItemActionOutput {
    pub success: bool,
    pub message: String,
    pub item: Option<ItemOutput>,
}

impl CommandOutput for ItemActionOutput {
    fn to_human(&self) -> String {
        match self.item {
            Some(ref item) => format!(
                "{}\n  [{}] #{} {}",
                self.message,
                if item.is_completed { "x" } else { " " },
                item.id,
                item.text
            ),
            None => self.message.clone(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Open the configured database behind a cached store.
pub async fn open_store(config: &Config) -> Result<CachedItemStore<SqliteItemRepository>> {
    let pool_config = PoolConfig {
        max_connections: config.database.max_connections,
        ..PoolConfig::default()
    };
    let pool = initialize_database(&config.database.url(), Some(pool_config))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;

    let repo = Arc::new(SqliteItemRepository::new(pool));
    Ok(CachedItemStore::from_config(repo, &config.cache))
}

/// Run an item subcommand against the cached SQLite store.
pub async fn execute(command: ItemCommands, config: &Config, json_mode: bool) -> Result<()> {
    let store = open_store(config).await?;
    run(&store, command, json_mode).await
}

/// Run one item command against any cached store.
pub async fn run<R: ItemRepository + 'static>(
    store: &CachedItemStore<R>,
    command: ItemCommands,
    json_mode: bool,
) -> Result<()> {
    match command {
        ItemCommands::List => {
            let items = store.get_all().await?;
            output(&ItemListOutput::new(&items), json_mode);
        }

        ItemCommands::Show { id } => {
            let out = match store.get(id).await? {
                Some(item) => ItemActionOutput {
                    success: true,
                    message: format!("Item {id}"),
                    item: Some(ItemOutput::from(&item)),
                },
                None => ItemActionOutput {
                    success: false,
                    message: format!("Item not found: {id}"),
                    item: None,
                },
            };
            output(&out, json_mode);
        }

        ItemCommands::Add { text, completed } => {
            let created = store.add(&NewItem::new(text).completed(completed)).await?;
            let out = ItemActionOutput {
                success: true,
                message: format!("Item created: {}", created.id),
                item: Some(ItemOutput::from(&created)),
            };
            output(&out, json_mode);
        }

        ItemCommands::Update { id, text, completed } => {
            // The store updates unconditionally, so check existence first
            if store.get(id).await?.is_none() {
                return Err(DomainError::ItemNotFound(id).into());
            }

            let item = Item::new(id, text, completed);
            store.update(&item).await?;
            let out = ItemActionOutput {
                success: true,
                message: format!("Item updated: {id}"),
                item: Some(ItemOutput::from(&item)),
            };
            output(&out, json_mode);
        }

        ItemCommands::Delete { id } => {
            store.delete(id).await?;
            let out = ItemActionOutput {
                success: true,
                message: format!("Item deleted: {id}"),
                item: None,
            };
            output(&out, json_mode);
        }

        ItemCommands::Search { term } => {
            let items = store.fuzzy_find(&term).await?;
            output(&ItemListOutput::new(&items), json_mode);
        }
    }

    Ok(())
}
