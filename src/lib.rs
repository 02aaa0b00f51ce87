//! # filekv
//!
//! An embedded, single-process key-value storage engine:
//! - One durable file per key, written with an atomic temp+rename protocol
//! - In-memory ordered index for fast lookups and ordered traversal
//! - Bounded LRU cache in front of the index
//! - Index snapshots for warm restarts
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Embedder                              │
//! │          (CLI / server translating calls to core)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Driver                                │
//! │              (coarse reader/writer lock)                     │
//! └───────┬─────────────────┬──────────────────┬────────────────┘
//!         │                 │                  │
//!         ▼                 ▼                  ▼
//!  ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//!  │  LruCache   │   │ OrderedIndex │   │  FileStore  │
//!  │ (own lock)  │   │   (BTree)    │   │ (1 file/key)│
//!  └─────────────┘   └──────┬───────┘   └─────────────┘
//!                           │
//!                           ▼
//!                    ┌─────────────┐
//!                    │  Snapshot   │
//!                    │   (JSON)    │
//!                    └─────────────┘
//! ```
//!
//! Reads consult cache, then index, then disk, back-filling the faster
//! tiers on the way out. Writes update cache and index, then land on disk
//! atomically. Disk is the sole source of truth across restarts.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cache;
pub mod index;
pub mod store;
pub mod snapshot;
pub mod driver;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileKvError, Result};
pub use config::Config;
pub use driver::Driver;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
