//! In-memory caching layer for item reads.
//!
//! A single TTL-bound snapshot of the item collection with write
//! invalidation. Wraps the repository trait as a decorator.

pub mod cached_item_store;

pub use cached_item_store::CachedItemStore;
