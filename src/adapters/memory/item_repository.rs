//! In-memory implementation of the ItemRepository.
//!
//! Keeps items in an ordered map and counts read calls, which makes it the
//! backing store of choice for cache tests. Reads and writes can be made to
//! fail to exercise error propagation.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Item, NewItem};
use crate::domain::ports::ItemRepository;

/// In-memory item store with read counters and failure switches.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<i64, Item>>,
    next_id: AtomicI64,
    get_all_calls: AtomicUsize,
    get_calls: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryItemRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seed the repository. New IDs continue after the highest seeded one.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            items: RwLock::new(items.into_iter().map(|item| (item.id, item)).collect()),
            next_id: AtomicI64::new(next_id),
            get_all_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Number of `get_all` calls served so far.
    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    /// Number of `get` calls served so far.
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Make `get_all` and `get` fail while set.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make `add`, `update` and `delete` fail while set.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("simulated read failure".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("simulated write failure".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_all(&self) -> DomainResult<Vec<Item>> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Item>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn add(&self, item: &NewItem) -> DomainResult<Item> {
        self.check_writes()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = item.clone().with_id(id);
        self.items.write().await.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, item: &Item) -> DomainResult<()> {
        self.check_writes()?;
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.check_writes()?;
        self.items.write().await.remove(&id);
        Ok(())
    }
}
