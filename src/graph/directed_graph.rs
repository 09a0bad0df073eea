//! Core graph structure: vertices mapped to ordered adjacency lists.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};

use crate::types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT, NO_EDGE_WEIGHT};

use super::traversal;

/// A mutable, weighted directed graph backed by adjacency lists.
///
/// Vertices iterate in first-insertion order. Removing a vertex keeps the
/// relative order of the others. Each adjacency list keeps its edges in
/// insertion order, which is the order traversals follow them.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Vertex -> outgoing edges, in insertion order.
    adjacency: IndexMap<V, Vec<Edge<V>>>,
    /// Running total of edges across all adjacency lists.
    edge_count: usize,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutation ====================

    /// Add a vertex. Returns `Ok(true)` if it was not already present.
    ///
    /// Passing `None` is rejected with [`GraphError::InvalidArgument`].
    pub fn add_vertex(&mut self, vertex: impl Into<Option<V>>) -> GraphResult<bool> {
        let vertex = vertex
            .into()
            .ok_or(GraphError::InvalidArgument("vertex must not be absent"))?;
        Ok(self.ensure_vertex(vertex).1)
    }

    /// Add an edge of weight 1.0, creating either endpoint if needed.
    ///
    /// Returns `Ok(false)` if an edge `origin -> destination` already exists.
    pub fn add_edge(
        &mut self,
        origin: impl Into<Option<V>>,
        destination: impl Into<Option<V>>,
    ) -> GraphResult<bool> {
        self.add_weighted_edge(origin, destination, DEFAULT_WEIGHT)
    }

    /// Add a weighted edge, creating either endpoint if needed.
    ///
    /// An existing edge between the same ordered pair is left untouched,
    /// weight included, and `Ok(false)` is returned. Both endpoints are
    /// checked before anything is inserted.
    pub fn add_weighted_edge(
        &mut self,
        origin: impl Into<Option<V>>,
        destination: impl Into<Option<V>>,
        weight: f64,
    ) -> GraphResult<bool> {
        match (origin.into(), destination.into()) {
            (Some(origin), Some(destination)) => Ok(self.insert_edge(origin, destination, weight)),
            _ => Err(GraphError::InvalidArgument(
                "edge endpoints must not be absent",
            )),
        }
    }

    /// Remove the edge `origin -> destination`. Returns whether one was removed.
    pub fn remove_edge<Q>(&mut self, origin: &Q, destination: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        let Some(edges) = self.adjacency.get_mut(origin) else {
            return false;
        };
        match edges
            .iter()
            .position(|e| destination.equivalent(&e.destination))
        {
            Some(pos) => {
                edges.remove(pos);
                self.edge_count -= 1;
                log::trace!("edge removed, {} edges remain", self.edge_count);
                true
            }
            None => false,
        }
    }

    /// Remove a vertex together with every edge that starts or ends at it.
    ///
    /// Returns whether the vertex existed.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        let Some(outgoing) = self.adjacency.shift_remove(vertex) else {
            return false;
        };

        let mut removed = outgoing.len();
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| !vertex.equivalent(&e.destination));
            removed += before - edges.len();
        }
        self.edge_count -= removed;

        log::debug!(
            "removed vertex with {} incident edges, {} edges remain",
            removed,
            self.edge_count
        );
        true
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing graph of {} vertices and {} edges",
            self.adjacency.len(),
            self.edge_count
        );
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Insert `vertex` if absent. Returns its index and whether it was new.
    fn ensure_vertex(&mut self, vertex: V) -> (usize, bool) {
        match self.adjacency.get_index_of(&vertex) {
            Some(index) => (index, false),
            None => (self.adjacency.insert_full(vertex, Vec::new()).0, true),
        }
    }

    fn insert_edge(&mut self, origin: V, destination: V, weight: f64) -> bool {
        // Origin first: it must precede a newly created destination.
        let (origin_index, _) = self.ensure_vertex(origin);
        self.ensure_vertex(destination.clone());

        let edges = &mut self.adjacency[origin_index];
        if edges.iter().any(|e| e.destination == destination) {
            return false;
        }
        edges.push(Edge::new(destination, weight));
        self.edge_count += 1;
        log::trace!("edge added, {} edges total", self.edge_count);
        true
    }

    // ==================== Queries ====================

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `vertex` is in the graph.
    pub fn has_vertex<Q>(&self, vertex: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Whether the edge `origin -> destination` exists.
    pub fn has_edge<Q>(&self, origin: &Q, destination: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edge(origin, destination).is_some()
    }

    /// The edge `origin -> destination`, if present.
    pub fn edge<Q>(&self, origin: &Q, destination: &Q) -> Option<&Edge<V>>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edges_from(origin)
            .iter()
            .find(|e| destination.equivalent(&e.destination))
    }

    /// Weight of `origin -> destination`, or [`NO_EDGE_WEIGHT`] (positive
    /// infinity) when there is no such edge.
    pub fn edge_weight<Q>(&self, origin: &Q, destination: &Q) -> f64
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edge(origin, destination)
            .map_or(NO_EDGE_WEIGHT, |e| e.weight)
    }

    /// Outgoing edges of `vertex`; empty for unknown vertices.
    pub fn edges_from<Q>(&self, vertex: &Q) -> &[Edge<V>]
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// An owned copy of the outgoing edges of `vertex`.
    pub fn outgoing_edges<Q>(&self, vertex: &Q) -> Vec<Edge<V>>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edges_from(vertex).to_vec()
    }

    /// Destinations of the outgoing edges of `vertex`, in insertion order.
    pub fn neighbors<Q>(&self, vertex: &Q) -> Vec<V>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edges_from(vertex)
            .iter()
            .map(|e| e.destination.clone())
            .collect()
    }

    /// Vertices with an edge into `vertex`, in vertex insertion order.
    pub fn predecessors<Q>(&self, vertex: &Q) -> Vec<V>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency
            .iter()
            .filter(|(_, edges)| edges.iter().any(|e| vertex.equivalent(&e.destination)))
            .map(|(origin, _)| origin.clone())
            .collect()
    }

    /// Number of outgoing edges of `vertex`; 0 for unknown vertices.
    pub fn out_degree<Q>(&self, vertex: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.edges_from(vertex).len()
    }

    /// Number of edges anywhere in the graph that end at `vertex`.
    ///
    /// Scans every adjacency list; no reverse index is kept.
    pub fn in_degree<Q>(&self, vertex: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| vertex.equivalent(&e.destination))
            .count()
    }

    /// All vertices as an unordered set.
    pub fn all_vertices(&self) -> HashSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterate vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Iterate `(vertex, outgoing edges)` pairs in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[Edge<V>])> + '_ {
        self.adjacency
            .iter()
            .map(|(vertex, edges)| (vertex, edges.as_slice()))
    }

    /// The stored key equal to `vertex`.
    pub(crate) fn stored_vertex<Q>(&self, vertex: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.adjacency.get_key_value(vertex).map(|(v, _)| v)
    }

    // ==================== Traversal ====================

    /// Depth-first visitation order from `start`; empty if `start` is unknown.
    pub fn dfs<Q>(&self, start: &Q) -> Vec<V>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        traversal::depth_first(self, start)
    }

    /// Breadth-first visitation order from `start`; empty if `start` is unknown.
    pub fn bfs<Q>(&self, start: &Q) -> Vec<V>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        traversal::breadth_first(self, start)
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V, f64)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V, f64)>>(&mut self, iter: I) {
        for (origin, destination, weight) in iter {
            self.insert_edge(origin, destination, weight);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V, f64)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V, f64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
