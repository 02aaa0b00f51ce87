//! Index Module
//!
//! In-memory ordered map mirroring the durable keys.
//!
//! ## Responsibilities
//! - O(log n) point lookups without touching disk
//! - Full ascending traversal (snapshot serialization, future range scans)
//! - Serve as the authority for existence checks in the driver
//!
//! ## Data Structure Choice
//! `std::collections::BTreeMap`: balanced, ordered, cache-friendly. The
//! `fanout` construction parameter is kept as a tuning hint for an eventual
//! custom node layout; it has no behavioral effect today.
//!
//! ## Consistency
//! The index is derived state, rebuilt wholesale by a snapshot load or
//! populated lazily by reads that fall through to disk. It holds no disk
//! pointers. Synchronization is the driver's job; the index itself is a
//! plain single-threaded structure.

mod tree;

pub use tree::OrderedIndex;
