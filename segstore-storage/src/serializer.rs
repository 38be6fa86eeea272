//! Encoding boundary between typed state values and stored bytes.

use serde::{de::DeserializeOwned, Serialize};

use segstore_core::{serialization, SerializationError};

/// Converts a state value to and from its stored byte form.
///
/// Stores hold only the bytes this produces and never look inside them.
pub trait StateSerializer<S>: Send + Sync {
    /// Encode a state value.
    fn encode(&self, state: &S) -> Result<Vec<u8>, SerializationError>;

    /// Decode a state value from bytes previously produced by `encode`.
    fn decode(&self, bytes: &[u8]) -> Result<S, SerializationError>;
}

/// Serializer using the deterministic bincode encoding from `segstore-core`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeSerializer;

impl<S> StateSerializer<S> for BincodeSerializer
where
    S: Serialize + DeserializeOwned,
{
    fn encode(&self, state: &S) -> Result<Vec<u8>, SerializationError> {
        serialization::serialize(state)
    }

    fn decode(&self, bytes: &[u8]) -> Result<S, SerializationError> {
        serialization::deserialize(bytes)
    }
}
