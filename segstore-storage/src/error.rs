//! Storage error types.

use segstore_core::SerializationError;
use thiserror::Error;

/// Errors that can occur during state store operations.
///
/// Both variants originate in the serializer; the map operations themselves
/// cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The state value could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The stored bytes could not be decoded back into a state value.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl From<SerializationError> for StoreError {
    fn from(e: SerializationError) -> Self {
        match e {
            SerializationError::EncodeFailed(msg) => StoreError::Encoding(msg),
            SerializationError::DecodeFailed(msg) => StoreError::Decoding(msg),
        }
    }
}
