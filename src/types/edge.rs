//! The edge value stored in adjacency lists.

use std::fmt;

use serde::Serialize;

use super::DEFAULT_WEIGHT;

/// A directed, weighted edge as stored in its origin's adjacency list.
///
/// The origin is not stored: it is the key the list lives under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    /// Destination vertex.
    pub destination: V,
    /// Edge weight.
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Create a new edge with an explicit weight.
    pub fn new(destination: V, weight: f64) -> Self {
        Self {
            destination,
            weight,
        }
    }

    /// Create a new edge with the default weight of 1.0.
    pub fn unweighted(destination: V) -> Self {
        Self::new(destination, DEFAULT_WEIGHT)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.destination, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_edge_uses_default() {
        let edge = Edge::unweighted("B");
        assert_eq!(edge.destination, "B");
        assert_eq!(edge.weight, 1.0);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new("D", 2.0).to_string(), "D(2.0)");
        assert_eq!(Edge::new(7, 0.25).to_string(), "7(0.25)");
    }
}
