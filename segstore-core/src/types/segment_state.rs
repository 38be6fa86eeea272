//! Per-segment state record.
//!
//! A `SegmentState` is what a segment container saves for each segment it
//! knows about, keyed by segment name, so that the segment's id, truncation
//! point and attributes survive eviction from the container's metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a segment attribute.
pub type AttributeId = u128;

/// Saved state of a single segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentState {
    /// Container-assigned segment id.
    pub segment_id: u64,

    /// Fully qualified segment name.
    pub segment_name: String,

    /// Offset below which the segment has been truncated.
    pub start_offset: u64,

    /// Current length of the segment in bytes.
    pub length: u64,

    /// Whether the segment accepts further appends.
    pub sealed: bool,

    /// Extended attributes, ordered by id so encoding is deterministic.
    pub attributes: BTreeMap<AttributeId, i64>,
}

impl SegmentState {
    /// Create an empty, unsealed state for a segment.
    pub fn new(segment_id: u64, segment_name: impl Into<String>) -> Self {
        Self {
            segment_id,
            segment_name: segment_name.into(),
            start_offset: 0,
            length: 0,
            sealed: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the segment length.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = length;
        self
    }

    /// Set the truncation offset.
    pub fn with_start_offset(mut self, start_offset: u64) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Set the sealed flag.
    pub fn with_sealed(mut self, sealed: bool) -> Self {
        self.sealed = sealed;
        self
    }

    /// Set an attribute, replacing any previous value for the same id.
    pub fn with_attribute(mut self, id: AttributeId, value: i64) -> Self {
        self.attributes.insert(id, value);
        self
    }

    /// Look up an attribute value.
    pub fn attribute(&self, id: AttributeId) -> Option<i64> {
        self.attributes.get(&id).copied()
    }
}
