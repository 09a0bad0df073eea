//! Graph traversal algorithms (DFS and BFS).

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use indexmap::Equivalent;

use crate::types::Edge;

use super::DirectedGraph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Follow each branch to its end before backtracking.
    DepthFirst,
    /// Visit vertices in order of distance from the start.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse a traversal order from a name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the traversal selected by `order` from `start`.
pub fn traverse<V, Q>(graph: &DirectedGraph<V>, start: &Q, order: TraversalOrder) -> Vec<V>
where
    V: Eq + Hash + Clone,
    Q: ?Sized + Hash + Equivalent<V>,
{
    match order {
        TraversalOrder::DepthFirst => depth_first(graph, start),
        TraversalOrder::BreadthFirst => breadth_first(graph, start),
    }
}

/// Depth-first traversal from `start`, returning vertices in first-visit order.
///
/// Produces exactly the order of the recursive formulation: a vertex's edges
/// are explored in adjacency-list order, each branch fully before the next.
/// Each stack frame is a cursor into one adjacency list, so depth is bounded
/// by the heap rather than the call stack.
pub fn depth_first<V, Q>(graph: &DirectedGraph<V>, start: &Q) -> Vec<V>
where
    V: Eq + Hash + Clone,
    Q: ?Sized + Hash + Equivalent<V>,
{
    let Some(start) = graph.stored_vertex(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<std::slice::Iter<'_, Edge<V>>> = Vec::new();

    visited.insert(start);
    order.push(start.clone());
    stack.push(graph.edges_from(start).iter());

    loop {
        let next = match stack.last_mut() {
            Some(cursor) => cursor.next(),
            None => break,
        };
        match next {
            Some(edge) => {
                let vertex = &edge.destination;
                if visited.insert(vertex) {
                    order.push(vertex.clone());
                    stack.push(graph.edges_from(vertex).iter());
                }
            }
            // This vertex's edges are exhausted: backtrack.
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Breadth-first traversal from `start`, returning vertices in dequeue order.
///
/// Vertices are marked when enqueued, so none is queued twice.
pub fn breadth_first<V, Q>(graph: &DirectedGraph<V>, start: &Q) -> Vec<V>
where
    V: Eq + Hash + Clone,
    Q: ?Sized + Hash + Equivalent<V>,
{
    let Some(start) = graph.stored_vertex(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for edge in graph.edges_from(current) {
            if visited.insert(&edge.destination) {
                queue.push_back(&edge.destination);
            }
        }
    }

    order
}
