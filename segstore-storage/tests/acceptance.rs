//! Acceptance tests for segstore-storage.
//!
//! These tests drive the in-memory store through the public API only:
//! 1. Round-trip, overwrite, missing-key and remove semantics
//! 2. Key isolation
//! 3. Sharing one store across concurrent tasks
//! 4. Use through a trait object, the way containers hold their store

use std::sync::Arc;

use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use segstore_core::SegmentState;
use segstore_storage::{AsyncMap, InMemoryStateStore, StoreConfig};

/// Install a test subscriber once; honors `RUST_LOG`.
fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn new_store() -> InMemoryStateStore<SegmentState> {
    init_test_tracing();
    InMemoryStateStore::new()
}

/// Helper to create a test segment state with a specific seed.
fn create_state(seed: u64) -> SegmentState {
    SegmentState::new(seed, format!("scope/stream/{}.#epoch.0", seed))
        .with_start_offset(seed)
        .with_length(seed * 100)
        .with_sealed(seed % 2 == 0)
        .with_attribute(seed as u128, -(seed as i64))
}

#[tokio::test]
async fn test_segment_lifecycle() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    let state = SegmentState::new(1, "segment-1").with_length(100).with_sealed(false);

    store.put("segment-1", &state, timeout).await.unwrap();
    let fetched = store.get("segment-1", timeout).await.unwrap().unwrap();
    assert_eq!(fetched.length, 100);
    assert!(!fetched.sealed);
    assert_eq!(fetched, state);

    store.remove("segment-1", timeout).await.unwrap();
    assert_eq!(store.get("segment-1", timeout).await.unwrap(), None);
}

#[tokio::test]
async fn test_roundtrip_many_states() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    for seed in 0..200 {
        let state = create_state(seed);
        store.put(state.segment_name.as_str(), &state, timeout).await.unwrap();
    }

    assert_eq!(store.len(), 200);
    for seed in 0..200 {
        let expected = create_state(seed);
        let fetched = store.get(expected.segment_name.as_str(), timeout).await.unwrap();
        assert_eq!(fetched, Some(expected));
    }
}

#[tokio::test]
async fn test_missing_key_is_none() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    assert_eq!(store.get("never-written", timeout).await, Ok(None));
    assert_eq!(store.get("", timeout).await, Ok(None));
}

#[tokio::test]
async fn test_overwrite_returns_latest() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    let v1 = SegmentState::new(5, "segment-5").with_length(10);
    let v2 = SegmentState::new(5, "segment-5").with_length(10).with_sealed(true);

    store.put("segment-5", &v1, timeout).await.unwrap();
    store.put("segment-5", &v2, timeout).await.unwrap();

    assert_eq!(store.get("segment-5", timeout).await.unwrap(), Some(v2));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_remove_twice() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    store.put("segment-1", &create_state(1), timeout).await.unwrap();

    assert!(store.remove("segment-1", timeout).await.is_ok());
    assert!(store.remove("segment-1", timeout).await.is_ok());
    assert_eq!(store.get("segment-1", timeout).await.unwrap(), None);
}

#[tokio::test]
async fn test_key_isolation() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    let s1 = create_state(1);
    let s2 = create_state(2);

    store.put("k1", &s1, timeout).await.unwrap();
    assert_eq!(store.get("k2", timeout).await.unwrap(), None);

    store.put("k2", &s2, timeout).await.unwrap();
    store.put("k1", &create_state(3), timeout).await.unwrap();
    store.remove("k1", timeout).await.unwrap();

    assert_eq!(store.get("k2", timeout).await.unwrap(), Some(s2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writers_distinct_keys() {
    init_test_tracing();
    let store = Arc::new(InMemoryStateStore::<SegmentState>::with_config(
        StoreConfig::new().with_initial_capacity(1024).with_shard_amount(8),
        Default::default(),
    ));
    let timeout = store.config().default_timeout;

    let handles: Vec<_> = (0..16u64)
        .map(|task| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..50u64 {
                    let seed = task * 1000 + i;
                    let state = create_state(seed);
                    store.put(state.segment_name.as_str(), &state, timeout).await.unwrap();
                }
            })
        })
        .collect();

    for result in join_all(handles).await {
        result.unwrap();
    }

    assert_eq!(store.len(), 16 * 50);
    for task in 0..16u64 {
        for i in 0..50u64 {
            let expected = create_state(task * 1000 + i);
            let fetched = store.get(expected.segment_name.as_str(), timeout).await.unwrap();
            assert_eq!(fetched, Some(expected));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_and_writers_same_key() {
    let store = Arc::new(new_store());
    let timeout = store.config().default_timeout;
    let written: Arc<Vec<SegmentState>> = Arc::new((0..8u64).map(create_state).collect());

    let writers = (0..8usize).map(|w| {
        let store = Arc::clone(&store);
        let written = Arc::clone(&written);
        tokio::spawn(async move {
            for round in 0..200usize {
                let state = &written[(w + round) % written.len()];
                store.put("shared", state, timeout).await.unwrap();
                if round % 50 == 49 {
                    store.remove("shared", timeout).await.unwrap();
                }
                tokio::task::yield_now().await;
            }
        })
    });

    let readers = (0..4usize).map(|_| {
        let store = Arc::clone(&store);
        let written = Arc::clone(&written);
        tokio::spawn(async move {
            for _ in 0..500usize {
                // Every read sees either nothing or one complete write.
                match store.get("shared", timeout).await.unwrap() {
                    None => {}
                    Some(state) => assert!(written.contains(&state), "torn read: {:?}", state),
                }
                tokio::task::yield_now().await;
            }
        })
    });

    let handles: Vec<_> = writers.chain(readers).collect();
    for result in join_all(handles).await {
        result.unwrap();
    }

    if let Some(last) = store.get("shared", timeout).await.unwrap() {
        assert!(written.contains(&last));
    }
    assert!(store.len() <= 1);
}

#[tokio::test]
async fn test_trait_object_store() {
    let concrete = new_store();
    let timeout = concrete.config().default_timeout;
    let store: Arc<dyn AsyncMap<str, SegmentState>> = Arc::new(concrete);
    let state = create_state(9);

    store.put("segment-9", &state, timeout).await.unwrap();
    assert!(store.contains_key("segment-9", timeout).await.unwrap());
    assert_eq!(store.get("segment-9", timeout).await.unwrap(), Some(state));

    store.remove("segment-9", timeout).await.unwrap();
    assert!(!store.contains_key("segment-9", timeout).await.unwrap());
}

#[tokio::test]
async fn test_clear_drops_everything() {
    let store = new_store();
    let timeout = store.config().default_timeout;
    for seed in 0..10 {
        let key = format!("segment-{}", seed);
        store.put(key.as_str(), &create_state(seed), timeout).await.unwrap();
    }
    assert_eq!(store.keys().len(), 10);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get("segment-3", timeout).await.unwrap(), None);
}
