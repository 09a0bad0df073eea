//! Query tests: presence, weights, degrees, neighbours, predecessors, rendering.

use std::collections::HashSet;

use dgraph::graph::DirectedGraph;
use dgraph::types::{Edge, NO_EDGE_WEIGHT};

fn sample_graph() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_weighted_edge("A", "B", 5.0).unwrap();
    graph.add_weighted_edge("A", "C", 3.0).unwrap();
    graph.add_weighted_edge("B", "D", 2.0).unwrap();
    graph.add_weighted_edge("C", "D", 1.0).unwrap();
    graph.add_weighted_edge("D", "E", 4.0).unwrap();
    graph.add_weighted_edge("B", "E", 6.0).unwrap();
    graph
}

#[test]
fn test_counts() {
    let graph = sample_graph();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert!(!graph.is_empty());
}

#[test]
fn test_presence() {
    let graph = sample_graph();
    assert!(graph.has_vertex("A"));
    assert!(!graph.has_vertex("Z"));
    assert!(graph.has_edge("A", "B"));
    assert!(!graph.has_edge("B", "A"));
    assert!(!graph.has_edge("Z", "A"));
    assert!(!graph.has_edge("A", "Z"));
}

#[test]
fn test_edge_weight_and_sentinel() {
    let graph = sample_graph();
    assert_eq!(graph.edge_weight("A", "B"), 5.0);
    assert_eq!(graph.edge_weight("D", "E"), 4.0);

    assert_eq!(graph.edge_weight("E", "D"), NO_EDGE_WEIGHT);
    assert!(graph.edge_weight("Z", "A").is_infinite());
    assert!(graph.edge_weight("A", "Z") > 0.0);
}

#[test]
fn test_weight_infinite_whenever_edge_missing() {
    let graph = sample_graph();
    let names = ["A", "B", "C", "D", "E", "Z"];
    for o in names {
        for d in names {
            if !graph.has_edge(o, d) {
                assert_eq!(graph.edge_weight(o, d), f64::INFINITY, "{} -> {}", o, d);
            }
        }
    }
}

#[test]
fn test_degrees() {
    let graph = sample_graph();
    assert_eq!(graph.out_degree("A"), 2);
    assert_eq!(graph.out_degree("B"), 2);
    assert_eq!(graph.out_degree("E"), 0);
    assert_eq!(graph.out_degree("Z"), 0);

    assert_eq!(graph.in_degree("D"), 2);
    assert_eq!(graph.in_degree("E"), 2);
    assert_eq!(graph.in_degree("A"), 0);
    assert_eq!(graph.in_degree("Z"), 0);
}

#[test]
fn test_neighbors_in_insertion_order() {
    let graph = sample_graph();
    assert_eq!(graph.neighbors("A"), vec!["B", "C"]);
    assert_eq!(graph.neighbors("B"), vec!["D", "E"]);
    assert!(graph.neighbors("E").is_empty());
    assert!(graph.neighbors("Z").is_empty());
}

#[test]
fn test_outgoing_edges_is_a_copy() {
    let graph = sample_graph();
    let mut edges = graph.outgoing_edges("A");
    assert_eq!(edges, vec![Edge::new("B", 5.0), Edge::new("C", 3.0)]);

    edges.clear();
    edges.push(Edge::new("Z", 0.0));

    assert_eq!(graph.out_degree("A"), 2);
    assert!(!graph.has_vertex("Z"));
    assert_eq!(graph.edges_from("A").len(), 2);
}

#[test]
fn test_edge_lookup() {
    let graph = sample_graph();
    let edge = graph.edge("C", "D").unwrap();
    assert_eq!(edge.destination, "D");
    assert_eq!(edge.weight, 1.0);
    assert!(graph.edge("D", "C").is_none());
}

#[test]
fn test_predecessors() {
    let graph = sample_graph();
    assert_eq!(graph.predecessors("D"), vec!["B", "C"]);
    assert_eq!(graph.predecessors("E"), vec!["B", "D"]);
    assert!(graph.predecessors("A").is_empty());
    assert!(graph.predecessors("Z").is_empty());
}

#[test]
fn test_all_vertices() {
    let graph = sample_graph();
    let expected: HashSet<&str> = ["A", "B", "C", "D", "E"].into_iter().collect();
    assert_eq!(graph.all_vertices(), expected);

    let ordered: Vec<&str> = graph.vertices().copied().collect();
    assert_eq!(ordered, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_display() {
    let graph = sample_graph();
    let expected = "directed graph (5 vertices, 6 edges)\n\
                    A -> [B(5.0), C(3.0)]\n\
                    B -> [D(2.0), E(6.0)]\n\
                    C -> [D(1.0)]\n\
                    D -> [E(4.0)]\n\
                    E -> []";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_integer_vertices() {
    let mut graph: DirectedGraph<u64> = DirectedGraph::new();
    graph.add_weighted_edge(1u64, 2u64, 0.25).unwrap();
    graph.add_edge(2u64, 3u64).unwrap();

    assert_eq!(graph.neighbors(&1u64), vec![2]);
    assert_eq!(graph.predecessors(&3u64), vec![2]);
    assert_eq!(graph.edge_weight(&1u64, &2u64), 0.25);
    assert_eq!(graph.to_string().lines().nth(1), Some("1 -> [2(0.25)]"));
}
