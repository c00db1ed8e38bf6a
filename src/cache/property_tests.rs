//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache contract against arbitrary operation mixes.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{Cache, CacheStore, COMMENT, NEWS};

const TEST_EXPIRY: u64 = 1800;

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

fn partition_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(NEWS), Just(COMMENT)]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { partition: &'static str, key: String, value: String },
    Get { partition: &'static str, key: String },
    Evict { partition: &'static str, key: String },
    EvictAll { partition: &'static str },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (partition_strategy(), valid_key_strategy(), valid_value_strategy())
            .prop_map(|(partition, key, value)| CacheOp::Put { partition, key, value }),
        4 => (partition_strategy(), valid_key_strategy())
            .prop_map(|(partition, key)| CacheOp::Get { partition, key }),
        2 => (partition_strategy(), valid_key_strategy())
            .prop_map(|(partition, key)| CacheOp::Evict { partition, key }),
        1 => partition_strategy().prop_map(|partition| CacheOp::EvictAll { partition }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any op sequence behaves like a plain map of maps inside the window.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store = CacheStore::new(TEST_EXPIRY);
        let mut model: HashMap<(&'static str, String), String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { partition, key, value } => {
                    store.put(partition, key.clone(), value.clone());
                    model.insert((partition, key), value);
                }
                CacheOp::Get { partition, key } => {
                    let got = store.get(partition, &key);
                    let want = model.get(&(partition, key)).cloned();
                    if want.is_some() { expected_hits += 1 } else { expected_misses += 1 }
                    prop_assert_eq!(got, want);
                }
                CacheOp::Evict { partition, key } => {
                    store.evict(partition, &key);
                    model.remove(&(partition, key));
                }
                CacheOp::EvictAll { partition } => {
                    store.evict_all(partition);
                    model.retain(|(p, _), _| *p != partition);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }

    // A key never written reads as absent.
    #[test]
    fn prop_unknown_key_absent(
        partition in partition_strategy(),
        written in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 0..20),
        probe in valid_key_strategy()
    ) {
        prop_assume!(written.iter().all(|(k, _)| *k != probe));
        let mut store = CacheStore::new(TEST_EXPIRY);
        for (key, value) in written {
            store.put(partition, key, value);
        }

        prop_assert!(store.get(partition, &probe).is_none());
    }

    // Last put wins.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_EXPIRY);

        store.put(NEWS, key.clone(), value1);
        store.put(NEWS, key.clone(), value2.clone());

        prop_assert_eq!(store.get(NEWS, &key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Evicting one key leaves its neighbours alone.
    #[test]
    fn prop_evict_removes_exactly_one_key(
        entries in prop::collection::hash_map(valid_key_strategy(), valid_value_strategy(), 1..30),
        pick in any::<prop::sample::Index>()
    ) {
        let mut store = CacheStore::new(TEST_EXPIRY);
        for (key, value) in &entries {
            store.put(COMMENT, key.clone(), value.clone());
        }

        let keys: Vec<&String> = entries.keys().collect();
        let victim = keys[pick.index(keys.len())].clone();
        store.evict(COMMENT, &victim);

        prop_assert!(store.get(COMMENT, &victim).is_none());
        for (key, value) in &entries {
            if *key != victim {
                prop_assert_eq!(store.get(COMMENT, key), Some(value.clone()));
            }
        }
    }

    // After evict_all nothing written before it is visible.
    #[test]
    fn prop_evict_all_clears_partition(
        entries in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 1..30)
    ) {
        let mut store = CacheStore::new(TEST_EXPIRY);
        for (key, value) in &entries {
            store.put(NEWS, key.clone(), value.clone());
            store.put(COMMENT, key.clone(), value.clone());
        }

        store.evict_all(NEWS);

        for (key, _) in &entries {
            prop_assert!(store.get(NEWS, key).is_none());
            prop_assert!(store.get(COMMENT, key).is_some());
        }
    }
}

// Separate proptest block with fewer cases for time-sensitive expiry tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    #[test]
    fn prop_expired_entries_read_absent(
        key in valid_key_strategy(),
        value in valid_value_strategy()
    ) {
        let mut store = CacheStore::new(1);

        store.put(NEWS, key.clone(), value.clone());
        prop_assert_eq!(store.get(NEWS, &key), Some(value));

        sleep(Duration::from_millis(1100));

        prop_assert!(store.get(NEWS, &key).is_none());
    }
}

// Concurrent access through the shared handle.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_concurrent_operations_keep_values_whole(
        initial in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 1..20),
        ops in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = Cache::new(TEST_EXPIRY);
            let mut written: Vec<String> = Vec::new();

            for (key, value) in &initial {
                cache.put(NEWS, key.clone(), value.clone()).await;
                written.push(value.clone());
            }
            for op in &ops {
                if let CacheOp::Put { value, .. } = op {
                    written.push(value.clone());
                }
            }

            let mut handles = vec![];
            for op in ops {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    match op {
                        CacheOp::Put { partition, key, value } => {
                            cache.put(partition, key, value).await;
                            None
                        }
                        CacheOp::Get { partition, key } => cache.get(partition, &key).await,
                        CacheOp::Evict { partition, key } => {
                            cache.evict(partition, &key).await;
                            None
                        }
                        CacheOp::EvictAll { partition } => {
                            cache.evict_all(partition).await;
                            None
                        }
                    }
                }));
            }

            for handle in handles {
                let read = handle.await.expect("Task should not panic");
                if let Some(value) = read {
                    prop_assert!(written.contains(&value), "Read a value never written: {}", value);
                }
            }

            let stats = cache.stats().await;
            let rate = stats.hit_rate();
            prop_assert!((0.0..=1.0).contains(&rate));
            Ok(())
        })?;
    }
}
