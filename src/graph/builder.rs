//! Fluent API for building DirectedGraph instances.

use std::hash::Hash;

use crate::types::{GraphResult, DEFAULT_WEIGHT};

use super::DirectedGraph;

enum Step<V> {
    Vertex(Option<V>),
    Edge(Option<V>, Option<V>, f64),
}

/// Fluent builder for constructing a DirectedGraph.
///
/// Calls are recorded and replayed in order by [`GraphBuilder::build`], so
/// the result is the same as issuing the mutations directly.
pub struct GraphBuilder<V> {
    steps: Vec<Step<V>>,
}

impl<V: Eq + Hash + Clone> GraphBuilder<V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex: impl Into<Option<V>>) -> &mut Self {
        self.steps.push(Step::Vertex(vertex.into()));
        self
    }

    /// Add several vertices.
    pub fn vertices<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.steps
            .extend(vertices.into_iter().map(|v| Step::Vertex(Some(v))));
        self
    }

    /// Add an edge with the default weight.
    pub fn edge(
        &mut self,
        origin: impl Into<Option<V>>,
        destination: impl Into<Option<V>>,
    ) -> &mut Self {
        self.weighted_edge(origin, destination, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        &mut self,
        origin: impl Into<Option<V>>,
        destination: impl Into<Option<V>>,
        weight: f64,
    ) -> &mut Self {
        self.steps
            .push(Step::Edge(origin.into(), destination.into(), weight));
        self
    }

    /// Build the final DirectedGraph.
    ///
    /// Fails with the first `InvalidArgument` raised while replaying.
    pub fn build(self) -> GraphResult<DirectedGraph<V>> {
        let mut graph = DirectedGraph::new();
        for step in self.steps {
            match step {
                Step::Vertex(vertex) => {
                    graph.add_vertex(vertex)?;
                }
                Step::Edge(origin, destination, weight) => {
                    graph.add_weighted_edge(origin, destination, weight)?;
                }
            }
        }
        Ok(graph)
    }
}

impl<V: Eq + Hash + Clone> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
