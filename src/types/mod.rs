//! All data types for the undigraph library.

pub mod error;
pub mod stats;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use stats::GraphStats;
pub use vertex::Vertex;

use serde::Serialize;

/// Stable handle naming one vertex in a graph's arena.
///
/// Handles are issued sequentially and never reused, so two vertices holding
/// equal values still have distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// The raw sequence number behind this handle.
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
