//! Item repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Item, NewItem};

/// Repository interface for item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every item.
    async fn get_all(&self) -> DomainResult<Vec<Item>>;

    /// Get an item by ID.
    async fn get(&self, id: i64) -> DomainResult<Option<Item>>;

    /// Persist a new item. The store assigns and returns its identity.
    async fn add(&self, item: &NewItem) -> DomainResult<Item>;

    /// Replace the text and completion flag of an existing item.
    ///
    /// Unconditional: callers are expected to have checked existence.
    async fn update(&self, item: &Item) -> DomainResult<()>;

    /// Delete an item. Deleting an absent ID is a no-op.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
