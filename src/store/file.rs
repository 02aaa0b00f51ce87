//! FileStore implementation
//!
//! Flat directory of durable files, one per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FileKvError, Result};

use super::{atomic_write, TEMP_SUFFIX};

/// One-file-per-key durable storage under a root directory
///
/// Holds no mutable state of its own; every method maps directly onto
/// filesystem calls. Mutual exclusion between writers is the driver's job.
pub struct FileStore {
    /// Root directory holding the durable files
    root: PathBuf,
}

impl FileStore {
    /// Open storage rooted at `path`, creating the directory if needed
    pub fn open(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(dir = %path.display(), "using existing store directory");
        } else {
            tracing::info!(dir = %path.display(), "creating store directory");
        }
        fs::create_dir_all(path)?;

        Ok(Self {
            root: path.to_path_buf(),
        })
    }

    /// Durably write a value for a key
    ///
    /// Uses the temp+rename protocol: after a crash at any point the durable
    /// file holds either the prior value or the new one, never a partial
    /// write. The caller is expected to have validated the key.
    pub fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        atomic_write(&self.file_path(key), value)?;
        Ok(())
    }

    /// Read the value for a key
    ///
    /// Returns:
    /// - `Ok(value)` — durable file exists, content is the value verbatim
    /// - `Err(KeyNotFound)` — no durable file for this key
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        match fs::read(self.file_path(key)) {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FileKvError::KeyNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the durable file for a key
    ///
    /// Idempotent: a missing file is treated as success.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Sweep orphaned temp files out of the root directory
    ///
    /// Lists the directory once and deletes every entry whose name carries
    /// the temp suffix. Individual removal failures are logged and skipped;
    /// durable files are never inspected or touched. Returns the number of
    /// files removed.
    pub fn compact(&self) -> Result<usize> {
        let mut removed = 0;

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.ends_with(TEMP_SUFFIX) {
                continue;
            }

            match fs::remove_file(entry.path()) {
                Ok(()) => {
                    tracing::debug!(file = name, "removed orphaned temp file");
                    removed += 1;
                }
                Err(e) => {
                    tracing::warn!(file = name, error = %e, "failed to remove temp file, skipping");
                }
            }
        }

        Ok(removed)
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Path of the durable file for a key
    fn file_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}
