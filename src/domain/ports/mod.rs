//! Port trait definitions (Hexagonal Architecture)
//!
//! - ItemRepository: backing-store operations for to-do items
//! - Clock: monotonic time source used for cache expiry
//!
//! These traits define the contracts that keep the domain independent
//! of specific infrastructure implementations.

pub mod clock;
pub mod item_repository;

pub use clock::{Clock, ManualClock, SystemClock};
pub use item_repository::ItemRepository;
