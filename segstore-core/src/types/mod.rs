//! Segment store data types.

mod segment_state;

pub use segment_state::{AttributeId, SegmentState};
