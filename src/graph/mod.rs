//! In-memory directed graph: the core data structure and its algorithms.

pub mod builder;
pub mod directed_graph;
pub mod summary;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::DirectedGraph;
pub use summary::{AdjacencyEntry, GraphSummary, EMPTY_GRAPH};
pub use traversal::{breadth_first, depth_first, traverse, TraversalOrder};
