//! Read-through cache in front of an `ItemRepository`.
//!
//! Holds a single snapshot of the full item collection with a TTL. Reads are
//! served from the snapshot while it is fresh. `add` rebuilds the snapshot
//! eagerly so the new identity is visible at once; `update` and `delete` drop
//! it and the next read refreshes lazily.
//!
//! A published snapshot is never mutated. Replacement is a pointer swap under
//! the state lock, and the store call of a write always completes before the
//! snapshot is dropped or rebuilt. A refresh that started before an
//! invalidation is not published, so a completed write is never shadowed by a
//! snapshot read ahead of it.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{fold_case, CacheConfig, Item, NewItem};
use crate::domain::ports::{Clock, ItemRepository, SystemClock};

/// Default TTL for the cached item snapshot.
const SNAPSHOT_TTL_SECS: u64 = 300;

/// One complete read of the backing store.
#[derive(Debug)]
struct Snapshot {
    items: Vec<Item>,
    created_at: Instant,
}

impl Snapshot {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

#[derive(Debug, Default)]
struct CacheState {
    snapshot: Option<Arc<Snapshot>>,
    /// Bumped by every invalidation.
    generation: u64,
}

/// Cached item store decorator.
///
/// Wraps any `ItemRepository` and implements the same trait, so callers can
/// hold either layer behind `Arc<dyn ItemRepository>`.
pub struct CachedItemStore<R: ItemRepository> {
    inner: Arc<R>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    state: RwLock<CacheState>,
}

impl<R: ItemRepository> CachedItemStore<R> {
    /// Create a new cached store with the default five minute TTL.
    pub fn new(inner: Arc<R>) -> Self {
        Self::with_ttl(inner, Duration::from_secs(SNAPSHOT_TTL_SECS))
    }

    /// Create with custom TTL.
    pub fn with_ttl(inner: Arc<R>, ttl: Duration) -> Self {
        Self::with_clock(inner, ttl, Arc::new(SystemClock))
    }

    /// Create from the `cache` section of the configuration.
    pub fn from_config(inner: Arc<R>, config: &CacheConfig) -> Self {
        Self::with_ttl(inner, config.ttl())
    }

    /// Create with custom TTL and time source.
    pub fn with_clock(inner: Arc<R>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            clock,
            ttl,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Snapshot time-to-live.
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Items whose text contains `term`, ignoring case.
    ///
    /// Runs over the cached snapshot, refreshing it first when absent or
    /// expired. Items with empty text never match; an empty term matches
    /// every other item.
    pub async fn fuzzy_find(&self, term: &str) -> DomainResult<Vec<Item>> {
        let snapshot = self.current_snapshot().await?;
        let needle = fold_case(term);
        let matches: Vec<Item> = snapshot
            .items
            .iter()
            .filter(|item| item.text_contains_folded(&needle))
            .cloned()
            .collect();

        debug!(term, matches = matches.len(), "fuzzy find over cached items");
        Ok(matches)
    }

    /// The published snapshot if it has not expired.
    async fn fresh_snapshot(&self) -> Option<Arc<Snapshot>> {
        let state = self.state.read().await;
        let snapshot = state.snapshot.as_ref()?;
        if snapshot.is_fresh(self.clock.now(), self.ttl) {
            Some(Arc::clone(snapshot))
        } else {
            debug!("cached item snapshot expired");
            None
        }
    }

    async fn current_snapshot(&self) -> DomainResult<Arc<Snapshot>> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!(items = snapshot.items.len(), "item cache hit");
            return Ok(snapshot);
        }
        debug!("item cache miss");
        self.refresh().await
    }

    /// Read the full collection and publish it as the new snapshot.
    ///
    /// The result is returned to the caller even when an invalidation raced
    /// with the read, but in that case it is not published.
    async fn refresh(&self) -> DomainResult<Arc<Snapshot>> {
        let generation = self.state.read().await.generation;

        let items = self.inner.get_all().await?;
        let snapshot = Arc::new(Snapshot {
            items,
            created_at: self.clock.now(),
        });

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.snapshot = Some(Arc::clone(&snapshot));
            debug!(items = snapshot.items.len(), "item cache refreshed");
        } else {
            debug!("discarding item snapshot read before an invalidation");
        }
        Ok(snapshot)
    }

    /// Drop the snapshot and fence off refreshes already in flight.
    async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.snapshot = None;
        state.generation = state.generation.wrapping_add(1);
        debug!("item cache invalidated");
    }
}

#[async_trait]
impl<R: ItemRepository + 'static> ItemRepository for CachedItemStore<R> {
    async fn get_all(&self) -> DomainResult<Vec<Item>> {
        let snapshot = self.current_snapshot().await?;
        Ok(snapshot.items.clone())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Item>> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            if let Some(item) = snapshot.items.iter().find(|item| item.id == id) {
                return Ok(Some(item.clone()));
            }
        }

        // Point lookups never populate the snapshot
        self.inner.get(id).await
    }

    async fn add(&self, item: &NewItem) -> DomainResult<Item> {
        let created = self.inner.add(item).await.inspect_err(|err| {
            warn!(error = %err, "item add failed, cache left untouched");
        })?;

        self.invalidate().await;
        self.refresh().await?;
        Ok(created)
    }

    async fn update(&self, item: &Item) -> DomainResult<()> {
        self.inner.update(item).await.inspect_err(|err| {
            warn!(id = item.id, error = %err, "item update failed, cache left untouched");
        })?;

        self.invalidate().await;
        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner.delete(id).await.inspect_err(|err| {
            warn!(id, error = %err, "item delete failed, cache left untouched");
        })?;

        self.invalidate().await;
        Ok(())
    }
}
