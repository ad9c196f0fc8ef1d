//! Core graph structure — a vertex arena plus the tracked node set.

use std::collections::HashSet;

use crate::types::{GraphError, GraphResult, GraphStats, Vertex, VertexId};

/// One arena record.
#[derive(Debug, Clone)]
struct Slot<T> {
    vertex: Vertex<T>,
    /// Whether the vertex is in the node set.
    tracked: bool,
}

/// An undirected graph keyed on vertex identity.
///
/// Vertices live in an arena and are named by [`VertexId`] handles. A vertex
/// may exist without being tracked in the node set, and edges may be formed
/// between untracked vertices; traversals follow adjacency either way.
///
/// Removing a vertex scrubs it from the adjacency of every *tracked* vertex.
/// Its own adjacency list, and references held by untracked vertices, are
/// left as they are.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Arena records, indexed by handle. `None` once reclaimed.
    slots: Vec<Option<Slot<T>>>,
    /// Tracked handles in insertion order.
    nodes: Vec<VertexId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Create an empty graph with arena room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Create a detached vertex holding `value`.
    ///
    /// The vertex is not in the node set until passed to [`Graph::add_vertex`].
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.slots.len() as u64);
        self.slots.push(Some(Slot {
            vertex: Vertex::new(value),
            tracked: false,
        }));
        id
    }

    /// Create a detached vertex already connected to `neighbors`.
    ///
    /// Every neighbor gets a symmetric edge back. All handles are checked
    /// before anything is created.
    pub fn create_vertex_with_adjacent<I>(
        &mut self,
        value: T,
        neighbors: I,
    ) -> GraphResult<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let neighbors: Vec<VertexId> = neighbors.into_iter().collect();
        for &n in &neighbors {
            self.check(n)?;
        }
        let id = self.create_vertex(value);
        for n in neighbors {
            self.add_edge(id, n)?;
        }
        Ok(id)
    }

    /// Create a vertex and add it to the node set in one step.
    pub fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(value);
        if let Some(slot) = self.slot_mut(id) {
            slot.tracked = true;
        }
        self.nodes.push(id);
        log::debug!("Inserted vertex {id}");
        id
    }

    /// Add a vertex to the node set. Returns false if it was already tracked.
    pub fn add_vertex(&mut self, id: VertexId) -> GraphResult<bool> {
        let slot = self.live_slot_mut(id)?;
        if slot.tracked {
            return Ok(false);
        }
        slot.tracked = true;
        self.nodes.push(id);
        log::debug!("Added vertex {id} to node set");
        Ok(true)
    }

    /// Add each vertex in order. Returns how many were newly tracked.
    ///
    /// Stops at the first invalid handle; vertices before it stay added.
    pub fn add_vertices<I>(&mut self, ids: I) -> GraphResult<usize>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut added = 0;
        for id in ids {
            if self.add_vertex(id)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Connect `a` and `b`. Returns false if the edge already existed.
    ///
    /// Neither endpoint has to be in the node set.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<bool> {
        self.check(b)?;
        let forward = self.live_slot_mut(a)?.vertex.link(b);
        let backward = self.live_slot_mut(b)?.vertex.link(a);
        let added = forward || backward;
        if added {
            log::debug!("Added edge {a} -- {b}");
        }
        Ok(added)
    }

    /// Disconnect `a` and `b`. Returns false if there was no edge.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<bool> {
        self.check(b)?;
        let forward = self.live_slot_mut(a)?.vertex.unlink(b);
        let backward = self.live_slot_mut(b)?.vertex.unlink(a);
        let removed = forward || backward;
        if removed {
            log::debug!("Removed edge {a} -- {b}");
        }
        Ok(removed)
    }

    /// Remove a vertex from the node set and from every tracked vertex's
    /// adjacency. Returns false if the vertex was not tracked.
    ///
    /// The scan runs even when the vertex is untracked, so stale references
    /// held by tracked vertices are still cleared.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<bool> {
        self.check(id)?;
        for i in 0..self.nodes.len() {
            let node = self.nodes[i];
            if let Some(slot) = self.slot_mut(node) {
                slot.vertex.unlink(id);
            }
        }

        let was_tracked = self.slot(id).is_some_and(|s| s.tracked);
        if was_tracked {
            if let Some(slot) = self.slot_mut(id) {
                slot.tracked = false;
            }
            self.nodes.retain(|&n| n != id);
            log::debug!("Removed vertex {id} from node set");
        }
        Ok(was_tracked)
    }

    /// Reclaim every arena record not reachable from the node set.
    ///
    /// Reachability follows adjacency from each tracked vertex. Detached
    /// vertices nobody links to are freed, so add them to the graph before
    /// sweeping if they are still wanted. Returns the number of records freed.
    pub fn sweep(&mut self) -> usize {
        let mut marked = vec![false; self.slots.len()];
        let mut stack: Vec<VertexId> = self.nodes.clone();
        while let Some(id) = stack.pop() {
            if marked[id.index()] {
                continue;
            }
            marked[id.index()] = true;
            stack.extend(
                self.neighbors(id)
                    .iter()
                    .copied()
                    .filter(|n| !marked[n.index()]),
            );
        }

        let mut freed = 0;
        for (slot, keep) in self.slots.iter_mut().zip(marked) {
            if !keep && slot.take().is_some() {
                freed += 1;
            }
        }
        if freed > 0 {
            log::info!("Sweep reclaimed {freed} unreachable vertices");
        }
        freed
    }

    /// Get a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.slot(id).map(|s| &s.vertex)
    }

    /// Get a vertex's value (immutable).
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(|v| &v.value)
    }

    /// Get a vertex's value (mutable).
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.slot_mut(id).map(|s| &mut s.vertex.value)
    }

    /// Whether the vertex is in the node set.
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some_and(|s| s.tracked)
    }

    /// Whether the handle names a live arena record, tracked or not.
    pub fn is_live(&self, id: VertexId) -> bool {
        self.slot(id).is_some()
    }

    /// Neighbors in edge-insertion order. Empty for a dead handle.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::adjacent).unwrap_or(&[])
    }

    /// Number of neighbors. Zero for a dead handle.
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Whether `a` lists `b` as a neighbor.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).is_some_and(|v| v.is_adjacent(b))
    }

    /// Tracked vertices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of tracked vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct undirected edges with at least one tracked endpoint.
    ///
    /// A re-added vertex may list a neighbor that no longer lists it back;
    /// such a one-sided entry still counts as one edge.
    pub fn edge_count(&self) -> usize {
        let mut edges: HashSet<(VertexId, VertexId)> = HashSet::new();
        for &u in &self.nodes {
            for &v in self.neighbors(u) {
                edges.insert((u.min(v), u.max(v)));
            }
        }
        edges.len()
    }

    /// Snapshot of the graph's size counters.
    pub fn stats(&self) -> GraphStats {
        let allocated = self.slots.iter().flatten().count();
        GraphStats {
            vertex_count: self.nodes.len(),
            edge_count: self.edge_count(),
            allocated,
            detached: allocated - self.nodes.len(),
            isolated: self.nodes.iter().filter(|&&n| self.degree(n) == 0).count(),
        }
    }

    /// Validate that `id` names a live arena record.
    pub(crate) fn check(&self, id: VertexId) -> GraphResult<()> {
        match self.slots.get(id.index()) {
            Some(Some(_)) => Ok(()),
            Some(None) => Err(GraphError::Reclaimed(id)),
            None => Err(GraphError::UnknownVertex(id)),
        }
    }

    fn slot(&self, id: VertexId) -> Option<&Slot<T>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Slot<T>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn live_slot_mut(&mut self, id: VertexId) -> GraphResult<&mut Slot<T>> {
        self.check(id)?;
        self.slot_mut(id).ok_or(GraphError::Reclaimed(id))
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
