//! Graph traversal algorithms (DFS, BFS, shortest path).
//!
//! All traversals visit neighbors in edge-insertion order, so output is
//! reproducible. They follow adjacency whether or not a vertex is tracked
//! in the node set. Only the endpoints are checked for liveness: a live
//! vertex never lists a reclaimed one, since sweeping keeps everything
//! reachable from a kept vertex.

use std::collections::{HashSet, VecDeque};

use crate::types::VertexId;

use super::Graph;

/// Visiting discipline for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Depth-first, preorder.
    DepthFirst,
    /// Breadth-first, level order.
    BreadthFirst,
}

/// Traverse from `start` using the given order.
pub fn traverse<T>(graph: &Graph<T>, start: VertexId, order: TraversalOrder) -> Vec<VertexId> {
    match order {
        TraversalOrder::DepthFirst => depth_first(graph, start),
        TraversalOrder::BreadthFirst => breadth_first(graph, start),
    }
}

/// Depth-first preorder from `start`.
///
/// Produces the same order as the recursive formulation (visit a vertex,
/// then recurse into each unvisited neighbor in turn) using an explicit
/// stack of `(vertex, next neighbor index)` frames. A dead `start` yields
/// an empty sequence.
pub fn depth_first<T>(graph: &Graph<T>, start: VertexId) -> Vec<VertexId> {
    if !graph.is_live(start) {
        return Vec::new();
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    visited.insert(start);
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let neighbors = graph.neighbors(current);
        match neighbors.get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if visited.insert(next) {
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    log::trace!("DFS from {start} visited {} vertices", order.len());
    order
}

/// Breadth-first level order from `start`.
///
/// Vertices are marked visited when enqueued, so a vertex reachable along two
/// in-progress paths is queued once. A dead `start` yields an empty sequence.
pub fn breadth_first<T>(graph: &Graph<T>, start: VertexId) -> Vec<VertexId> {
    if !graph.is_live(start) {
        return Vec::new();
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::trace!("BFS from {start} visited {} vertices", order.len());
    order
}

/// Fewest-edges path from `start` to `end`, inclusive of both ends.
///
/// Breadth-first search over partial paths: the first path whose last vertex
/// is `end` is a shortest one. Returns `None` when `end` is unreachable or
/// either handle is dead. `start == end` yields the single-vertex path.
pub fn shortest_path<T>(
    graph: &Graph<T>,
    start: VertexId,
    end: VertexId,
) -> Option<Vec<VertexId>> {
    if !graph.is_live(start) || !graph.is_live(end) {
        return None;
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<Vec<VertexId>> = VecDeque::new();

    visited.insert(start);
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let node = *path.last()?;
        if node == end {
            log::trace!("Shortest path {start} -> {end} has {} edges", path.len() - 1);
            return Some(path);
        }
        for &neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                queue.push_back(next);
            }
        }
    }

    log::trace!("No path from {start} to {end}");
    None
}

impl<T> Graph<T> {
    /// Values in depth-first preorder from `start`.
    pub fn depth_first_search(&self, start: VertexId) -> Vec<&T> {
        self.values_of(depth_first(self, start))
    }

    /// Values in breadth-first order from `start`.
    pub fn breadth_first_search(&self, start: VertexId) -> Vec<&T> {
        self.values_of(breadth_first(self, start))
    }

    /// Values along a fewest-edges path from `start` to `end`.
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Option<Vec<&T>> {
        shortest_path(self, start, end).map(|path| self.values_of(path))
    }

    /// Values visited from `start` in the given order.
    pub fn traverse(&self, start: VertexId, order: TraversalOrder) -> Vec<&T> {
        self.values_of(traverse(self, start, order))
    }

    fn values_of(&self, ids: Vec<VertexId>) -> Vec<&T> {
        ids.into_iter().filter_map(|id| self.value(id)).collect()
    }
}
