//! Property-Based Tests for the Cache Store
//!
//! Uses proptest to verify the storage invariants: bounded size, overwrite
//! semantics, oldest-write eviction, and counter accuracy.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

/// A single cache operation for sequence-based properties
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any valid key-value pair, storing then retrieving (before
    // expiration) returns exactly the stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.set(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // For any key, storing V1 then V2 leaves a single entry holding V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.set(key.clone(), value1);
        store.set(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1, "overwrite must not grow the table");
    }

    // For any sequence of sets, the table never exceeds its capacity.
    #[test]
    fn prop_capacity_invariant(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..200)
    ) {
        let capacity = 50;
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for (key, value) in entries {
            store.set(key, value);
            prop_assert!(
                store.len() <= capacity,
                "table size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // For any sequence of operations, the hit/miss counters match a shadow
    // count taken alongside the operations.
    #[test]
    fn prop_counter_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let snapshot = store.snapshot();
        prop_assert_eq!(snapshot.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(snapshot.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(snapshot.total_entries, store.len(), "entry count mismatch");
    }
}

// Timestamp-ordering properties run with few cases: each set is separated by
// a short sleep so write timestamps are strictly ordered.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    // Filling the cache then inserting one more key evicts exactly the entry
    // with the oldest write timestamp.
    #[test]
    fn prop_oldest_write_evicted(
        initial_keys in prop::collection::vec(key_strategy(), 3..8),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.set(key.clone(), format!("value_{}", key));
            sleep(Duration::from_millis(2));
        }

        prop_assert_eq!(store.len(), capacity);

        store.set(new_key.clone(), new_value);

        prop_assert_eq!(store.len(), capacity, "table must stay at capacity");
        prop_assert_eq!(
            store.get(&oldest_key),
            None,
            "the first-written key should have been evicted"
        );
        prop_assert!(store.get(&new_key).is_some());
        for key in unique_keys.iter().skip(1) {
            prop_assert!(store.get(key).is_some(), "key '{}' should survive", key);
        }
    }

    // Reads never refresh a write timestamp: an entry stays the eviction
    // candidate no matter how often it is read.
    #[test]
    fn prop_read_does_not_refresh(
        initial_keys in prop::collection::vec(key_strategy(), 3..8),
        reads in 1usize..20,
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for key in &unique_keys {
            store.set(key.clone(), format!("value_{}", key));
            sleep(Duration::from_millis(2));
        }

        // Hammer the oldest entry with reads
        let oldest_key = unique_keys[0].clone();
        for _ in 0..reads {
            prop_assert!(store.get(&oldest_key).is_some());
        }

        // It must still be the eviction victim
        store.set(new_key.clone(), new_value);

        prop_assert_eq!(
            store.get(&oldest_key),
            None,
            "reads must not protect an entry from eviction"
        );
        prop_assert!(store.get(&new_key).is_some());
    }
}
