//! # Segstore Storage
//!
//! Asynchronous state storage for segment containers.
//!
//! This crate provides:
//! - [`AsyncMap`], the put/get/remove capability every state store offers
//! - [`StateSerializer`], the encode/decode boundary between typed state
//!   values and the bytes a store holds
//! - [`InMemoryStateStore`], a volatile implementation for tests
//!
//! ## Architecture
//!
//! Stores never look inside the values they hold. A state value is encoded
//! by the injected serializer on `put` and decoded on `get`, so a test that
//! runs against the in-memory store exercises the same encode and decode
//! paths as one running against a durable store. The in-memory store keeps
//! everything in a sharded concurrent map and resolves every operation on
//! first poll.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod kv;
pub mod serializer;

pub use config::StoreConfig;
pub use error::StoreError;
pub use kv::{AsyncMap, InMemoryStateStore};
pub use serializer::{BincodeSerializer, StateSerializer};
