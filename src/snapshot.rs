//! Snapshot Module
//!
//! Serializes the whole ordered index to one external file for warm
//! restarts, and restores it on startup.
//!
//! ## Format
//! A single self-describing JSON document: an ordered list of
//! `{key, value}` entries in ascending key order, keys and values as byte
//! arrays. Written with the same temp+rename protocol as durable files, so
//! a crash mid-save leaves the previous snapshot intact.
//!
//! ## Failure Semantics
//! Loading is all-or-nothing: a missing file, truncated content, or decode
//! failure is reported as an error and the target index is left untouched.
//! The index is only cleared after the full document has decoded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::OrderedIndex;
use crate::store::atomic_write;

/// One index entry as it appears in the snapshot document
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    key: Vec<u8>,
    value: Vec<u8>,
}

/// Serialize the full index to `path`
///
/// Entries are emitted in ascending key order via the index's own
/// traversal; the write is atomic (temp file, fsync, rename).
pub fn save(index: &OrderedIndex, path: &Path) -> Result<()> {
    let entries: Vec<SnapshotEntry> = index
        .ascend()
        .map(|(key, value)| SnapshotEntry {
            key: key.to_vec(),
            value: value.to_vec(),
        })
        .collect();

    let document = serde_json::to_vec(&entries)?;
    atomic_write(path, &document)?;

    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "saved index snapshot"
    );
    Ok(())
}

/// Restore the index from the snapshot at `path`
///
/// On success the index is cleared and every decoded entry reinserted;
/// returns the number of entries restored. On any failure the index is
/// left exactly as it was.
pub fn load(index: &mut OrderedIndex, path: &Path) -> Result<usize> {
    let document = fs::read(path)?;
    let entries: Vec<SnapshotEntry> = serde_json::from_slice(&document)?;

    index.clear();
    let count = entries.len();
    for entry in entries {
        index.upsert(entry.key, entry.value);
    }

    tracing::info!(
        path = %path.display(),
        entries = count,
        "loaded index snapshot"
    );
    Ok(count)
}
