//! # Segstore Core
//!
//! Core types and serialization for the segment store.
//!
//! This crate provides the foundation shared by the storage crates:
//! - Segment state (`SegmentState`) as persisted per segment
//! - Deterministic binary serialization
//! - Error types for serialization and state validation

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod serialization;
pub mod types;

pub use error::{CoreError, SerializationError};
pub use types::{AttributeId, SegmentState};
