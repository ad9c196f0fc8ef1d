//! Phase 2 tests: DFS, BFS, shortest path.

use undigraph::graph::traversal::{breadth_first, depth_first, shortest_path, TraversalOrder};
use undigraph::graph::{Graph, GraphBuilder};
use undigraph::types::VertexId;

// ==================== Helper ====================

/// Build a graph with one tracked vertex per label and the given edges
/// (by label index).
fn labeled(
    labels: &[&'static str],
    edges: &[(usize, usize)],
) -> (Graph<&'static str>, Vec<VertexId>) {
    let mut builder = GraphBuilder::with_capacity(labels.len());
    let ids: Vec<VertexId> = labels.iter().map(|&l| builder.vertex(l)).collect();
    for &(a, b) in edges {
        builder.edge(ids[a], ids[b]);
    }
    (builder.build().unwrap(), ids)
}

fn owned(values: Vec<&&'static str>) -> Vec<&'static str> {
    values.into_iter().copied().collect()
}

// ==================== Depth-First Tests ====================

#[test]
fn test_dfs_isolated_vertex() {
    let (graph, ids) = labeled(&["A"], &[]);
    assert_eq!(owned(graph.depth_first_search(ids[0])), vec!["A"]);
}

#[test]
fn test_dfs_ring_visits_each_once() {
    let (graph, ids) = labeled(&["A", "B", "C"], &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(owned(graph.depth_first_search(ids[0])), vec!["A", "B", "C"]);
}

#[test]
fn test_dfs_follows_edge_insertion_order() {
    //     A
    //    / \
    //   B   C
    //   |   |
    //   D   E
    let (graph, ids) = labeled(
        &["A", "B", "C", "D", "E"],
        &[(0, 1), (0, 2), (1, 3), (2, 4)],
    );
    assert_eq!(
        owned(graph.depth_first_search(ids[0])),
        vec!["A", "B", "D", "C", "E"]
    );

    // Same shape, edges at A inserted in the other order.
    let (graph, ids) = labeled(
        &["A", "B", "C", "D", "E"],
        &[(0, 2), (0, 1), (1, 3), (2, 4)],
    );
    assert_eq!(
        owned(graph.depth_first_search(ids[0])),
        vec!["A", "C", "E", "B", "D"]
    );
}

#[test]
fn test_dfs_matches_recursive_order_on_back_edges() {
    // A-B, A-C, B-C: recursion reaches C through B before returning to A.
    let (graph, ids) = labeled(&["A", "B", "C"], &[(0, 1), (0, 2), (1, 2)]);
    assert_eq!(depth_first(&graph, ids[0]), vec![ids[0], ids[1], ids[2]]);
}

#[test]
fn test_dfs_deep_chain_no_stack_overflow() {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..100_000u32).map(|i| graph.insert_vertex(i)).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    let order = depth_first(&graph, ids[0]);
    assert_eq!(order.len(), ids.len());
    assert_eq!(order.last(), ids.last());
}

#[test]
fn test_dfs_dead_start_is_empty() {
    let mut graph = Graph::new();
    let v = graph.create_vertex(1);
    graph.sweep();
    assert!(graph.depth_first_search(v).is_empty());
}

// ==================== Breadth-First Tests ====================

#[test]
fn test_bfs_isolated_vertex() {
    let (graph, ids) = labeled(&["A"], &[]);
    assert_eq!(owned(graph.breadth_first_search(ids[0])), vec!["A"]);
}

#[test]
fn test_bfs_chain() {
    let (graph, ids) = labeled(&["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(
        owned(graph.breadth_first_search(ids[0])),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn test_bfs_level_order() {
    let (graph, ids) = labeled(
        &["A", "B", "C", "D", "E"],
        &[(0, 1), (0, 2), (1, 3), (2, 4)],
    );
    assert_eq!(
        owned(graph.breadth_first_search(ids[0])),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn test_bfs_diamond_no_duplicates() {
    let (graph, ids) = labeled(&["A", "B", "C", "D"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert_eq!(breadth_first(&graph, ids[0]), vec![ids[0], ids[1], ids[2], ids[3]]);
}

#[test]
fn test_bfs_stays_in_component() {
    let (graph, ids) = labeled(&["A", "B", "X", "Y"], &[(0, 1), (2, 3)]);
    assert_eq!(owned(graph.breadth_first_search(ids[2])), vec!["X", "Y"]);
}

#[test]
fn test_traversal_follows_untracked_vertices() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex("a");
    let hidden = graph.create_vertex("hidden");
    let c = graph.insert_vertex("c");
    graph.add_edge(a, hidden).unwrap();
    graph.add_edge(hidden, c).unwrap();

    assert_eq!(owned(graph.breadth_first_search(a)), vec!["a", "hidden", "c"]);
    assert_eq!(owned(graph.depth_first_search(a)), vec!["a", "hidden", "c"]);
}

#[test]
fn test_traverse_dispatch() {
    let (graph, ids) = labeled(&["A", "B", "C", "D"], &[(0, 1), (1, 2), (0, 3)]);
    assert_eq!(
        owned(graph.traverse(ids[0], TraversalOrder::DepthFirst)),
        vec!["A", "B", "C", "D"]
    );
    assert_eq!(
        owned(graph.traverse(ids[0], TraversalOrder::BreadthFirst)),
        vec!["A", "B", "D", "C"]
    );
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_to_self() {
    let (graph, ids) = labeled(&["A", "B"], &[(0, 1)]);
    assert_eq!(graph.shortest_path(ids[0], ids[0]).map(owned), Some(vec!["A"]));
}

#[test]
fn test_shortest_path_diamond() {
    let (graph, ids) = labeled(&["A", "B", "C", "D"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let path = shortest_path(&graph, ids[0], ids[3]).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.first(), Some(&ids[0]));
    assert_eq!(path.last(), Some(&ids[3]));
    // First neighbor in insertion order wins the tie.
    assert_eq!(path[1], ids[1]);
}

#[test]
fn test_shortest_path_prefers_fewer_edges() {
    // Long way A-B-C-D-E, short cut A-E.
    let (graph, ids) = labeled(
        &["A", "B", "C", "D", "E"],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)],
    );
    assert_eq!(graph.shortest_path(ids[0], ids[4]).map(owned), Some(vec!["A", "E"]));
    assert_eq!(
        graph.shortest_path(ids[1], ids[3]).map(owned),
        Some(vec!["B", "C", "D"])
    );
}

#[test]
fn test_shortest_path_unreachable() {
    let (graph, ids) = labeled(&["A", "B", "Z"], &[(0, 1)]);
    assert_eq!(graph.shortest_path(ids[0], ids[2]), None);
}

#[test]
fn test_shortest_path_after_edge_removal() {
    let (mut graph, ids) = labeled(&["A", "B", "C"], &[(0, 1), (1, 2)]);
    assert!(graph.shortest_path(ids[0], ids[2]).is_some());
    graph.remove_edge(ids[1], ids[2]).unwrap();
    assert!(graph.shortest_path(ids[0], ids[2]).is_none());
}

#[test]
fn test_shortest_path_dead_handles() {
    let mut graph = Graph::new();
    let a = graph.insert_vertex(1);
    let gone = graph.create_vertex(2);
    graph.sweep();
    assert_eq!(graph.shortest_path(a, gone), None);
    assert_eq!(graph.shortest_path(gone, a), None);
}

#[test]
fn test_traversal_from_foreign_handle() {
    let (graph, ids) = labeled(&["A", "B"], &[(0, 1)]);
    let mut other = Graph::new();
    for i in 0..5 {
        other.create_vertex(i);
    }
    let foreign = other.create_vertex(99);

    assert!(graph.depth_first_search(foreign).is_empty());
    assert!(graph.breadth_first_search(foreign).is_empty());
    assert_eq!(graph.shortest_path(foreign, ids[0]), None);
    // Live start, end never issued by this graph.
    assert_eq!(graph.shortest_path(ids[0], foreign), None);
    assert!(shortest_path(&graph, ids[0], foreign).is_none());
}
