//! Opaque ID newtype for timing graph nodes.
//!
//! [`NodeId`] is a thin `u32` wrapper used as an arena index into the
//! circuit graph. It is `Copy`, `Hash`, and `Serialize`/`Deserialize`.
//! Indices are assigned at node creation and are never reused or reordered,
//! so callers may cache them across analysis runs.

use serde::{Deserialize, Serialize};

/// Opaque, copyable ID for a node in the circuit graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates an ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize` for dense-vector addressing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
