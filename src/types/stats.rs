//! Summary counters for a graph.

use serde::Serialize;

/// A point-in-time summary of a graph's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    /// Vertices in the graph's node set.
    pub vertex_count: usize,
    /// Distinct undirected edges with at least one tracked endpoint.
    pub edge_count: usize,
    /// Live arena records, tracked or not.
    pub allocated: usize,
    /// Live arena records that are not in the node set.
    pub detached: usize,
    /// Tracked vertices with an empty adjacency list.
    pub isolated: usize,
}
