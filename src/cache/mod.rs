//! Cache Module
//!
//! Bounded, recency-evicting accelerator in front of the index and disk.
//!
//! ## Responsibilities
//! - O(1)-ish lookups for hot keys
//! - Evict the least-recently-used entry when capacity is exceeded
//! - Own its synchronization: every method takes `&self` and is safe to
//!   call concurrently without any external lock
//!
//! ## Consistency
//! The cache is derived state. It may lag behind the index and disk (an
//! entry can be evicted at any time) and is never consulted for existence
//! checks. Eviction notifications are diagnostics only.

mod lru;

pub use lru::LruCache;

/// Callback invoked synchronously when a capacity eviction removes an entry.
///
/// Receives the evicted key and value. Diagnostics only; correctness must
/// never depend on it being installed or on what it does.
pub type EvictionObserver = Box<dyn Fn(&[u8], &[u8]) + Send + Sync>;
