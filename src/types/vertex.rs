//! The vertex record stored in a graph's arena.

use super::VertexId;

/// A labeled vertex: a caller-supplied value plus its adjacency list.
///
/// The adjacency list is ordered by edge insertion and holds no duplicates.
/// It is only mutated through [`Graph`](crate::Graph) operations, which keep
/// it symmetric with the neighbors' lists.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// The payload carried by this vertex.
    pub value: T,
    adjacent: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: Vec::new(),
        }
    }

    /// Neighbors in edge-insertion order.
    pub fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }

    /// Number of distinct neighbors (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` is in this vertex's adjacency list.
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Appends `other` unless already present. Returns true if it was added.
    pub(crate) fn link(&mut self, other: VertexId) -> bool {
        if self.is_adjacent(other) {
            return false;
        }
        self.adjacent.push(other);
        true
    }

    /// Removes `other` if present, preserving the order of the rest.
    pub(crate) fn unlink(&mut self, other: VertexId) -> bool {
        match self.adjacent.iter().position(|&v| v == other) {
            Some(pos) => {
                self.adjacent.remove(pos);
                true
            }
            None => false,
        }
    }
}
