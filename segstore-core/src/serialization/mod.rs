//! Deterministic binary serialization for segment state.
//!
//! State values are encoded with bincode under a fixed configuration, so the
//! same state always produces the same bytes regardless of platform.

mod bincode_config;

pub use bincode_config::{deserialize, serialize, serialized_size};
