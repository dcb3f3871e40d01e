//! Todolist - list-management backend
//!
//! A to-do item store fronted by a read-through cache. The cache keeps one
//! TTL-bound snapshot of the whole collection, rebuilds it after an add and
//! drops it after an update or delete. Case-insensitive substring search runs
//! over the snapshot; a Levenshtein distance primitive is provided alongside.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): item model, configuration model, ports
//! - **Service Layer** (`services`): text similarity
//! - **Adapters** (`adapters`): cache decorator, SQLite and in-memory stores
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todolist::adapters::cache::CachedItemStore;
//! use todolist::adapters::sqlite::{initialize_database, SqliteItemRepository};
//! use todolist::{ItemRepository, NewItem};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:.todolist/todolist.db", None).await?;
//!     let store = CachedItemStore::new(Arc::new(SqliteItemRepository::new(pool)));
//!     store.add(&NewItem::new("Buy milk")).await?;
//!     let found = store.fuzzy_find("milk").await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::CachedItemStore;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{CacheConfig, Config, DatabaseConfig, Item, LoggingConfig, NewItem};
pub use domain::ports::{Clock, ItemRepository, ManualClock, SystemClock};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::SimilarityMatcher;
