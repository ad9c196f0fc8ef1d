//! undigraph — an in-memory undirected graph keyed on vertex identity.
//!
//! Vertices live in an arena and are named by stable [`VertexId`] handles, so
//! two vertices with equal values stay distinct. The graph tracks a node set,
//! keeps adjacency symmetric across every mutation, and offers depth-first,
//! breadth-first and fewest-edges path queries.
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//!
//! assert_eq!(graph.breadth_first_search(a), vec![&"a", &"b", &"c"]);
//! assert_eq!(graph.shortest_path(a, c), Some(vec![&"a", &"b", &"c"]));
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use types::{GraphError, GraphResult, GraphStats, Vertex, VertexId};
