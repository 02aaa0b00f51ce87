//! LRU cache implementation
//!
//! HashMap for lookups plus a tick-ordered BTreeMap for recency, both behind
//! one internal Mutex so callers never need to lock around the cache.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::EvictionObserver;

/// A slot in the cache: the value plus its position in the recency order
struct Slot {
    value: Vec<u8>,
    tick: u64,
}

/// State guarded by the cache's internal lock
struct Inner {
    /// Maximum number of entries before eviction kicks in
    capacity: usize,

    /// key → (value, recency tick)
    entries: HashMap<Vec<u8>, Slot>,

    /// recency tick → key; the smallest tick is the least recently used
    recency: BTreeMap<u64, Vec<u8>>,

    /// Monotonic counter handed out as recency ticks
    next_tick: u64,

    /// Optional eviction callback (diagnostics only)
    observer: Option<EvictionObserver>,
}

impl Inner {
    /// Assign the next recency tick (most-recently-used position)
    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    /// Evict least-recently-used entries until len <= capacity
    fn evict_to_capacity(&mut self) {
        while self.entries.len() > self.capacity {
            let Some((_, key)) = self.recency.pop_first() else {
                break;
            };
            if let Some(slot) = self.entries.remove(&key) {
                if let Some(observer) = &self.observer {
                    observer(&key, &slot.value);
                }
            }
        }
    }
}

/// Bounded LRU cache over opaque byte keys and values
///
/// ## Concurrency
/// All methods take `&self`; the cache owns a `parking_lot::Mutex` around
/// its state. Hit/miss counters are atomics so `stats()` never contends
/// with the main lock.
pub struct LruCache {
    inner: Mutex<Inner>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruCache {
    /// Create a cache that holds at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self::with_observer(capacity, None)
    }

    /// Create a cache with an optional eviction observer
    pub fn with_observer(capacity: usize, observer: Option<EvictionObserver>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                capacity,
                entries: HashMap::new(),
                recency: BTreeMap::new(),
                next_tick: 0,
                observer,
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Insert a key-value pair, or refresh recency if the key is present
    ///
    /// If the insert pushes the cache over capacity, the single
    /// least-recently-used entry is evicted and the observer (if any) is
    /// called synchronously with it.
    pub fn add(&self, key: &[u8], value: &[u8]) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let tick = inner.bump();
        if let Some(slot) = inner.entries.get_mut(key) {
            let old_tick = slot.tick;
            slot.value = value.to_vec();
            slot.tick = tick;
            inner.recency.remove(&old_tick);
            inner.recency.insert(tick, key.to_vec());
            return;
        }

        inner.entries.insert(
            key.to_vec(),
            Slot {
                value: value.to_vec(),
                tick,
            },
        );
        inner.recency.insert(tick, key.to_vec());
        inner.evict_to_capacity();
    }

    /// Look up a key, marking it most-recently-used on a hit
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let tick = inner.bump();
        match inner.entries.get_mut(key) {
            Some(slot) => {
                let old_tick = slot.tick;
                slot.tick = tick;
                let value = slot.value.clone();
                inner.recency.remove(&old_tick);
                inner.recency.insert(tick, key.to_vec());
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Remove a key unconditionally
    ///
    /// Absence is not an error, and the eviction observer is not invoked:
    /// this is an explicit removal, not a capacity eviction.
    pub fn remove(&self, key: &[u8]) {
        let mut inner = self.inner.lock();
        if let Some(slot) = inner.entries.remove(key) {
            inner.recency.remove(&slot.tick);
        }
    }

    /// Check presence without updating recency
    pub fn contains(&self, key: &[u8]) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    /// Current number of cached entries
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// True if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity
    }

    /// (hits, misses) counters since construction
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
