//! Configuration for filekv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a filekv Driver instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all durable files.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── <key>            (one file per key, content = value bytes)
    ///     └── <key>.tmp        (transient, orphans swept by compact)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Cache Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of entries held by the LRU cache
    pub cache_capacity: usize,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Fanout hint for the ordered index. Recorded as a tuning knob;
    /// lookups and iteration behave identically for any value.
    pub index_fanout: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./filekv_data"),
            cache_capacity: 128,
            index_fanout: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all durable files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the LRU cache capacity (number of entries)
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Set the ordered index fanout hint
    pub fn index_fanout(mut self, fanout: usize) -> Self {
        self.config.index_fanout = fanout;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
