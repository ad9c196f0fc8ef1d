//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Handles returned by the builder are valid in the graph produced by
/// [`GraphBuilder::build`].
pub struct GraphBuilder<T> {
    vertices: Vec<(T, bool)>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Add a vertex that will be in the node set.
    pub fn vertex(&mut self, value: T) -> VertexId {
        self.push(value, true)
    }

    /// Add a vertex that will exist but stay out of the node set.
    pub fn detached(&mut self, value: T) -> VertexId {
        self.push(value, false)
    }

    /// Connect two vertices.
    pub fn edge(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Connect `hub` to each of `others`, in order.
    pub fn star(&mut self, hub: VertexId, others: &[VertexId]) -> &mut Self {
        for &other in others {
            self.edges.push((hub, other));
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let issued = self.vertices.len() as u64;
        for &(a, b) in &self.edges {
            for id in [a, b] {
                if id.get() >= issued {
                    return Err(GraphError::UnknownVertex(id));
                }
            }
        }

        let mut graph = Graph::with_capacity(self.vertices.len());
        for (value, tracked) in self.vertices {
            if tracked {
                graph.insert_vertex(value);
            } else {
                graph.create_vertex(value);
            }
        }
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    fn push(&mut self, value: T, tracked: bool) -> VertexId {
        let id = VertexId(self.vertices.len() as u64);
        self.vertices.push((value, tracked));
        id
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
