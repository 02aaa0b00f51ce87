//! Store Module
//!
//! Authoritative on-disk storage: one durable file per key.
//!
//! ## Responsibilities
//! - Map each key to a file named exactly by the key under the root directory
//! - Crash-safe writes via the write-temp-then-rename protocol
//! - Validate keys at the filesystem boundary
//! - Sweep orphaned temp files left by interrupted writes
//!
//! ## Crash Safety
//! A write lands in `<key>.tmp` first (written and fsynced), then is renamed
//! onto `<key>`. The rename is atomic at the filesystem level, so a crash at
//! any point leaves either the prior durable file or the new one — never a
//! partial mix. The worst case is an orphaned `.tmp` sibling, which
//! `compact` removes.

mod file;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use file::FileStore;

use crate::error::{FileKvError, Result};

/// Suffix carried by in-flight temp files
pub const TEMP_SUFFIX: &str = ".tmp";

/// Validate a key for use as a filename under the root directory.
///
/// Accepts non-empty UTF-8 with no path separators or NUL, excluding the
/// `.`/`..` directory entries and anything carrying the temp suffix (which
/// would collide with in-flight writes and be swept by compaction).
pub fn validate_key(key: &[u8]) -> Result<&str> {
    if key.is_empty() {
        return Err(FileKvError::InvalidKey("key is required".to_string()));
    }
    let key = std::str::from_utf8(key)
        .map_err(|_| FileKvError::InvalidKey("key is not valid UTF-8".to_string()))?;
    if key.contains(['/', '\\', '\0']) {
        return Err(FileKvError::InvalidKey(format!(
            "key {:?} contains a path separator or NUL",
            key
        )));
    }
    if key == "." || key == ".." {
        return Err(FileKvError::InvalidKey(format!(
            "key {:?} is a reserved directory entry",
            key
        )));
    }
    if key.ends_with(TEMP_SUFFIX) {
        return Err(FileKvError::InvalidKey(format!(
            "key {:?} collides with the temp file suffix",
            key
        )));
    }
    Ok(key)
}

/// Write `bytes` to `path` atomically: temp file, fsync, rename.
pub(crate) fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(TEMP_SUFFIX);
    let temp_path = PathBuf::from(temp_name);

    let mut file = File::create(&temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&temp_path, path)
}
