//! Human-readable rendering and a serializable snapshot for diagnostics.
//!
//! Neither form is meant to be read back into a graph.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::types::Edge;

use super::DirectedGraph;

/// Text rendered for a graph with no vertices.
pub const EMPTY_GRAPH: &str = "empty graph";

/// One vertex and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry<V> {
    pub vertex: V,
    pub edges: Vec<Edge<V>>,
}

/// A point-in-time snapshot of a graph's shape, in vertex insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary<V> {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub adjacency: Vec<AdjacencyEntry<V>>,
}

impl<V: Eq + Hash + Clone> DirectedGraph<V> {
    /// Take a snapshot of the graph for diagnostics.
    pub fn summary(&self) -> GraphSummary<V> {
        GraphSummary {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            adjacency: self
                .adjacency()
                .map(|(vertex, edges)| AdjacencyEntry {
                    vertex: vertex.clone(),
                    edges: edges.to_vec(),
                })
                .collect(),
        }
    }
}

impl<V: Eq + Hash + Clone + fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_GRAPH);
        }

        write!(
            f,
            "directed graph ({} vertices, {} edges)",
            self.vertex_count(),
            self.edge_count()
        )?;
        for (vertex, edges) in self.adjacency() {
            write!(f, "\n{} -> [", vertex)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", edge)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
