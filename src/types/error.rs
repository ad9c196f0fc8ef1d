//! Error types for the undigraph library.

use thiserror::Error;

use super::VertexId;

/// Errors raised when a handle does not name a live vertex.
///
/// Membership and reachability anomalies (a vertex missing from the graph's
/// node set, a missing edge, an unreachable target) are never errors; those
/// operations degrade to no-ops or `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was never issued by this graph.
    #[error("Vertex {0} was never created in this graph")]
    UnknownVertex(VertexId),

    /// The handle was issued, but its vertex has since been reclaimed by a sweep.
    #[error("Vertex {0} has been reclaimed")]
    Reclaimed(VertexId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
