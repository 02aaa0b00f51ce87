//! OrderedIndex implementation
//!
//! BTreeMap keyed by raw bytes; byte-wise key ordering falls out of the
//! `Ord` impl for `Vec<u8>`.

use std::collections::BTreeMap;

/// In-memory ordered map from key to value
pub struct OrderedIndex {
    /// key → value, byte-wise ascending key order
    entries: BTreeMap<Vec<u8>, Vec<u8>>,

    /// Fanout hint recorded at construction (no behavioral effect)
    fanout: usize,
}

impl OrderedIndex {
    /// Create an empty index with the given fanout hint
    pub fn new(fanout: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            fanout,
        }
    }

    /// Insert or replace the value for a key
    ///
    /// Returns the previous value if the key was present.
    pub fn upsert(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(key, value)
    }

    /// Look up a key
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(|v| v.as_slice())
    }

    /// Remove a key
    ///
    /// Returns true iff the key was present.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Lazy iterator over all entries in ascending key order
    pub fn ascend(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fanout hint this index was constructed with
    pub fn fanout(&self) -> usize {
        self.fanout
    }
}
