//! Tests for LruCache
//!
//! These tests verify:
//! - Insert/lookup and recency refresh
//! - Eviction of the least-recently-used entry at capacity
//! - Eviction observer notification
//! - Remove/contains semantics
//! - Thread safety without external locking

use std::sync::{Arc, Mutex};
use std::thread;

use filekv::cache::LruCache;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_add_and_get() {
    let cache = LruCache::new(4);

    cache.add(b"apple", b"red");
    cache.add(b"banana", b"yellow");

    assert_eq!(cache.get(b"apple"), Some(b"red".to_vec()));
    assert_eq!(cache.get(b"banana"), Some(b"yellow".to_vec()));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_get_missing_key() {
    let cache = LruCache::new(4);

    assert_eq!(cache.get(b"nope"), None);
}

#[test]
fn test_add_replaces_value() {
    let cache = LruCache::new(4);

    cache.add(b"key", b"v1");
    cache.add(b"key", b"v2");

    assert_eq!(cache.get(b"key"), Some(b"v2".to_vec()));
    assert_eq!(cache.len(), 1);
}

// =============================================================================
// Eviction Tests
// =============================================================================

#[test]
fn test_evicts_least_recently_used() {
    let cache = LruCache::new(2);

    cache.add(b"a", b"1");
    cache.add(b"b", b"2");
    cache.add(b"c", b"3"); // evicts "a"

    assert_eq!(cache.get(b"a"), None);
    assert_eq!(cache.get(b"b"), Some(b"2".to_vec()));
    assert_eq!(cache.get(b"c"), Some(b"3".to_vec()));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_get_refreshes_recency() {
    let cache = LruCache::new(2);

    cache.add(b"a", b"1");
    cache.add(b"b", b"2");

    // Touch "a" so "b" becomes the LRU entry
    assert!(cache.get(b"a").is_some());

    cache.add(b"c", b"3"); // evicts "b", not "a"

    assert_eq!(cache.get(b"a"), Some(b"1".to_vec()));
    assert_eq!(cache.get(b"b"), None);
}

#[test]
fn test_add_refreshes_recency() {
    let cache = LruCache::new(2);

    cache.add(b"a", b"1");
    cache.add(b"b", b"2");
    cache.add(b"a", b"1b"); // refresh "a"
    cache.add(b"c", b"3"); // evicts "b"

    assert_eq!(cache.get(b"a"), Some(b"1b".to_vec()));
    assert_eq!(cache.get(b"b"), None);
}

#[test]
fn test_eviction_observer_called() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let evicted = Arc::clone(&evicted);
        Box::new(move |key: &[u8], value: &[u8]| {
            evicted.lock().unwrap().push((key.to_vec(), value.to_vec()));
        })
    };

    let cache = LruCache::with_observer(2, Some(observer));

    cache.add(b"a", b"1");
    cache.add(b"b", b"2");
    cache.add(b"c", b"3"); // expect eviction of "a"

    let expected = vec![(b"a".to_vec(), b"1".to_vec())];
    assert_eq!(*evicted.lock().unwrap(), expected);
}

#[test]
fn test_remove_does_not_notify_observer() {
    let evicted = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let evicted = Arc::clone(&evicted);
        Box::new(move |key: &[u8], value: &[u8]| {
            evicted.lock().unwrap().push((key.to_vec(), value.to_vec()));
        })
    };

    let cache = LruCache::with_observer(2, Some(observer));

    cache.add(b"a", b"1");
    cache.remove(b"a");

    assert!(evicted.lock().unwrap().is_empty());
    assert_eq!(cache.len(), 0);
}

// =============================================================================
// Remove/Contains Tests
// =============================================================================

#[test]
fn test_remove_missing_key_is_noop() {
    let cache = LruCache::new(2);

    cache.add(b"a", b"1");
    cache.remove(b"missing");

    assert_eq!(cache.len(), 1);
}

#[test]
fn test_contains_does_not_refresh_recency() {
    let cache = LruCache::new(2);

    cache.add(b"a", b"1");
    cache.add(b"b", b"2");

    // contains must not promote "a"
    assert!(cache.contains(b"a"));

    cache.add(b"c", b"3"); // still evicts "a"

    assert!(!cache.contains(b"a"));
    assert!(cache.contains(b"b"));
    assert!(cache.contains(b"c"));
}

// =============================================================================
// Stats Tests
// =============================================================================

#[test]
fn test_hit_miss_counters() {
    let cache = LruCache::new(4);

    cache.add(b"a", b"1");

    assert!(cache.get(b"a").is_some());
    assert!(cache.get(b"a").is_some());
    assert!(cache.get(b"missing").is_none());

    assert_eq!(cache.stats(), (2, 1));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_access_without_external_lock() {
    let cache = Arc::new(LruCache::new(64));
    let mut handles = Vec::new();

    for t in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let key = format!("t{}-{}", t, i % 16);
                cache.add(key.as_bytes(), b"value");
                let _ = cache.get(key.as_bytes());
                assert!(cache.len() <= 64);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 64);
}
