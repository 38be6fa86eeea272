//! Asynchronous key-value state stores.
//!
//! [`AsyncMap`] is the capability shared by every state store. Durable
//! implementations may genuinely suspend on I/O; [`InMemoryStateStore`]
//! completes every operation on first poll.

mod in_memory;

pub use in_memory::InMemoryStateStore;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

/// An asynchronous map from keys to typed state values.
///
/// Every operation takes a timeout. Implementations that can block should
/// honor it; implementations that never block may ignore it.
#[async_trait]
pub trait AsyncMap<K, V>: Send + Sync
where
    K: ?Sized + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Store `value` under `key`, replacing any previous value.
    async fn put(&self, key: &K, value: &V, timeout: Duration) -> Result<(), StoreError>;

    /// Fetch the value stored under `key`, or `None` if there is none.
    async fn get(&self, key: &K, timeout: Duration) -> Result<Option<V>, StoreError>;

    /// Remove the value stored under `key`. Succeeds if the key is absent.
    async fn remove(&self, key: &K, timeout: Duration) -> Result<(), StoreError>;

    /// Check whether a value is stored under `key`.
    async fn contains_key(&self, key: &K, timeout: Duration) -> Result<bool, StoreError> {
        Ok(self.get(key, timeout).await?.is_some())
    }
}

#[async_trait]
impl<K, V, T> AsyncMap<K, V> for Arc<T>
where
    K: ?Sized + Sync + 'static,
    V: Send + Sync + 'static,
    T: AsyncMap<K, V> + ?Sized,
{
    async fn put(&self, key: &K, value: &V, timeout: Duration) -> Result<(), StoreError> {
        (**self).put(key, value, timeout).await
    }

    async fn get(&self, key: &K, timeout: Duration) -> Result<Option<V>, StoreError> {
        (**self).get(key, timeout).await
    }

    async fn remove(&self, key: &K, timeout: Duration) -> Result<(), StoreError> {
        (**self).remove(key, timeout).await
    }

    async fn contains_key(&self, key: &K, timeout: Duration) -> Result<bool, StoreError> {
        (**self).contains_key(key, timeout).await
    }
}
