//! Volatile in-memory state store for testing.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use super::AsyncMap;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::serializer::{BincodeSerializer, StateSerializer};

/// In-memory state store backed by a concurrent hash map.
///
/// Values are held in encoded form, exactly as a durable store would keep
/// them, so encode and decode failures surface the same way. Nothing
/// survives the store being dropped.
///
/// Every operation finishes synchronously and the returned future is ready
/// on first poll. Timeouts are accepted and ignored. Per-key atomicity
/// comes from the map; there is no ordering across keys.
pub struct InMemoryStateStore<S, Z = BincodeSerializer> {
    map: DashMap<String, Bytes>,
    serializer: Z,
    config: StoreConfig,
    _state: PhantomData<fn() -> S>,
}

impl<S, Z: Default> InMemoryStateStore<S, Z> {
    /// Create an empty store with the default serializer and configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default(), Z::default())
    }
}

impl<S, Z: Default> Default for InMemoryStateStore<S, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, Z> InMemoryStateStore<S, Z> {
    /// Create an empty store using the given serializer.
    pub fn with_serializer(serializer: Z) -> Self {
        Self::with_config(StoreConfig::default(), serializer)
    }

    /// Create an empty store with explicit configuration.
    pub fn with_config(config: StoreConfig, serializer: Z) -> Self {
        let map = match config.valid_shard_amount() {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => {
                if let Some(requested) = config.shard_amount {
                    tracing::warn!(
                        requested,
                        "Ignoring shard amount that is not a power of two greater than one"
                    );
                }
                DashMap::with_capacity(config.initial_capacity)
            }
        };

        tracing::debug!(
            initial_capacity = config.initial_capacity,
            shard_amount = ?config.valid_shard_amount(),
            "Created in-memory state store"
        );

        Self {
            map,
            serializer,
            config,
            _state: PhantomData,
        }
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let dropped = self.map.len();
        self.map.clear();
        tracing::debug!(dropped, "Cleared in-memory state store");
    }

    /// Snapshot of the keys currently stored, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.map.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl<S, Z: StateSerializer<S>> InMemoryStateStore<S, Z> {
    fn store(&self, key: &str, value: &S) -> Result<(), StoreError> {
        let encoded = self.serializer.encode(value).map_err(|e| {
            tracing::warn!(key, error = %e, "Failed to encode state");
            StoreError::from(e)
        })?;

        tracing::trace!(key, len = encoded.len(), "put");
        self.map.insert(key.to_owned(), Bytes::from(encoded));
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<Option<S>, StoreError> {
        // Clone the handle out so the shard lock is released before decoding.
        let encoded = match self.map.get(key) {
            Some(entry) => entry.value().clone(),
            None => {
                tracing::trace!(key, "get: no state saved");
                return Ok(None);
            }
        };

        tracing::trace!(key, len = encoded.len(), "get");
        let state = self.serializer.decode(&encoded).map_err(|e| {
            tracing::warn!(key, error = %e, "Failed to decode stored state");
            StoreError::from(e)
        })?;
        Ok(Some(state))
    }

    fn delete(&self, key: &str) {
        let existed = self.map.remove(key).is_some();
        tracing::trace!(key, existed, "remove");
    }
}

#[async_trait]
impl<S, Z> AsyncMap<str, S> for InMemoryStateStore<S, Z>
where
    S: Send + Sync + 'static,
    Z: StateSerializer<S> + 'static,
{
    async fn put(&self, key: &str, value: &S, _timeout: Duration) -> Result<(), StoreError> {
        self.store(key, value)
    }

    async fn get(&self, key: &str, _timeout: Duration) -> Result<Option<S>, StoreError> {
        self.fetch(key)
    }

    async fn remove(&self, key: &str, _timeout: Duration) -> Result<(), StoreError> {
        self.delete(key);
        Ok(())
    }
}
