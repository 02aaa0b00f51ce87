//! Driver Module
//!
//! The storage driver that coordinates cache, index, and disk.
//!
//! ## Responsibilities
//! - Route every operation through the tiered lookup path
//! - Keep cache, index, and durable files in agreement per completed call
//! - Enforce the key validation boundary
//! - Expose snapshot save/load for warm restarts
//!
//! ## Concurrency Model: Coarse Reader/Writer Lock
//!
//! - **Writes** (put/delete/compact/save/load): exclusive lock on the index
//!   for the whole call; one writer at a time, no concurrent readers.
//! - **Reads** (get): shared lock; cache and index hits never block other
//!   readers. A read that falls through to disk drops the shared guard and
//!   re-enters exclusively to populate the index (the index cannot be
//!   mutated under a shared guard), re-checking it after the escalation.
//! - The cache synchronizes itself and is deliberately mutated under the
//!   shared lock: cache freshness is best-effort, not part of the
//!   index/disk consistency guarantee.
//!
//! ## Consistency Caveat
//! `put` updates cache and index before the durable write. If the disk
//! write then fails, memory is ahead of disk until the next successful put
//! for that key. This mirrors the in-call mutation order and is surfaced
//! here rather than rolled back; disk remains the sole source of truth
//! across restarts.

use std::path::Path;

use parking_lot::RwLock;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{FileKvError, Result};
use crate::index::OrderedIndex;
use crate::snapshot;
use crate::store::{validate_key, FileStore};

/// The storage driver
pub struct Driver {
    /// Driver configuration
    config: Config,

    /// Bounded LRU accelerator (internal synchronization)
    cache: LruCache,

    /// Ordered in-memory index; this RwLock is the driver lock
    index: RwLock<OrderedIndex>,

    /// One-file-per-key durable storage
    store: FileStore,
}

impl Driver {
    /// Open or create a driver with the given config
    ///
    /// Creates the data directory if it does not exist and constructs an
    /// empty cache and index. Loading a snapshot is the embedder's call to
    /// make, after open and before serving traffic.
    pub fn open(config: Config) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?;

        let observer: crate::cache::EvictionObserver = Box::new(|key: &[u8], _value: &[u8]| {
            tracing::debug!(key = %String::from_utf8_lossy(key), "cache evicted key");
        });
        let cache = LruCache::with_observer(config.cache_capacity, Some(observer));

        let index = OrderedIndex::new(config.index_fanout);

        Ok(Self {
            config,
            cache,
            index: RwLock::new(index),
            store,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Store a value for a key
    ///
    /// Holds the lock exclusively for the whole call. If the index already
    /// holds a byte-identical value, returns immediately without touching
    /// cache, disk, or eviction state. Otherwise updates cache, index, and
    /// the durable file in that order; the first error halts the call and
    /// earlier in-call mutations are not rolled back (see module docs).
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let key_str = validate_key(key)?;

        let mut index = self.index.write();

        // Idempotence short-circuit: an unchanged value costs no disk write
        if index.get(key) == Some(value) {
            tracing::debug!(key = key_str, "put skipped, value unchanged");
            return Ok(());
        }

        self.cache.add(key, value);
        index.upsert(key.to_vec(), value.to_vec());
        self.store.write(key_str, value)?;

        tracing::debug!(key = key_str, bytes = value.len(), "put key");
        Ok(())
    }

    /// Retrieve the value for a key
    ///
    /// Lookup order:
    /// 1. Cache (marks the entry most-recently-used)
    /// 2. Index (populates the cache)
    /// 3. Disk (populates index and cache)
    pub fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        let key_str = validate_key(key)?;

        {
            let index = self.index.read();

            if let Some(value) = self.cache.get(key) {
                tracing::trace!(key = key_str, "get key (cache hit)");
                return Ok(value);
            }

            if let Some(value) = index.get(key) {
                let value = value.to_vec();
                self.cache.add(key, &value);
                tracing::trace!(key = key_str, "get key (index hit)");
                return Ok(value);
            }
        }

        // Full miss: escalate to the exclusive lock so the index can be
        // populated from disk. Re-check the index first, another thread may
        // have raced us here.
        let mut index = self.index.write();

        if let Some(value) = index.get(key) {
            let value = value.to_vec();
            self.cache.add(key, &value);
            return Ok(value);
        }

        let value = self.store.read(key_str)?;
        index.upsert(key.to_vec(), value.clone());
        self.cache.add(key, &value);
        tracing::trace!(key = key_str, "get key (disk hit)");

        Ok(value)
    }

    /// Delete a key
    ///
    /// The index is the authority for existence: a key absent from the
    /// index fails with `KeyNotFound` and nothing is touched. Otherwise the
    /// index entry, cache entry (best-effort), and durable file are removed;
    /// a missing durable file counts as success.
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        let key_str = validate_key(key)?;

        let mut index = self.index.write();

        if !index.delete(key) {
            tracing::debug!(key = key_str, "delete of absent key");
            return Err(FileKvError::KeyNotFound);
        }

        self.cache.remove(key);
        self.store.remove(key_str)?;

        tracing::debug!(key = key_str, "deleted key");
        Ok(())
    }

    /// Remove orphaned temp files from the data directory
    ///
    /// Best-effort sweep: individual removal failures are logged and
    /// skipped. Durable files are never touched.
    pub fn compact(&self) -> Result<()> {
        let _index = self.index.write();

        let removed = self.store.compact()?;
        if removed > 0 {
            tracing::info!(removed, "compaction removed orphaned temp files");
        }
        Ok(())
    }

    /// Serialize the full index to a snapshot file
    ///
    /// Intended for controlled shutdown; the write is atomic, so a crash
    /// mid-save leaves any previous snapshot intact.
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let index = self.index.write();
        snapshot::save(&index, path)
    }

    /// Restore the index from a snapshot file
    ///
    /// Intended for startup, before serving traffic. All-or-nothing: on any
    /// read or decode failure the index is left untouched.
    pub fn load_snapshot(&self, path: &Path) -> Result<()> {
        let mut index = self.index.write();
        snapshot::load(&mut index, path)?;
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Number of entries currently in the index
    pub fn index_len(&self) -> usize {
        self.index.read().len()
    }

    /// Number of entries currently in the cache
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache (hits, misses) counters
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
