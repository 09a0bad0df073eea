//! dgraph: a generic, weighted directed graph backed by adjacency lists.
//!
//! Vertices are caller-supplied values of any `Eq + Hash + Clone` type. Each
//! vertex owns an insertion-ordered list of outgoing edges, and the graph
//! answers degree, neighbour and reachability queries over them.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first, depth_first, traverse, AdjacencyEntry, DirectedGraph, GraphBuilder,
    GraphSummary, TraversalOrder, EMPTY_GRAPH,
};
pub use types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT, NO_EDGE_WEIGHT};
