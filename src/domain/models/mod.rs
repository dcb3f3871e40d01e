//! Domain models.

pub mod config;
pub mod item;

pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig};
pub use item::{fold_case, Item, NewItem};
