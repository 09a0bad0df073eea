//! CLI command implementations.

use std::path::Path;

use crate::graph::{traverse, TraversalOrder};
use crate::types::GraphResult;

use super::edge_list::load_edge_list;

/// Print vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "empty": graph.is_empty(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the whole graph, one line per vertex.
pub fn cmd_show(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&graph.summary()).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
    }
    Ok(())
}

/// Print in- and out-degree of a vertex.
pub fn cmd_degree(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;
    let known = graph.has_vertex(vertex);
    let out_degree = graph.out_degree(vertex);
    let in_degree = graph.in_degree(vertex);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "vertex": vertex,
                "known": known,
                "out_degree": out_degree,
                "in_degree": in_degree,
            })
        );
    } else {
        if !known {
            println!("Vertex {} not found", vertex);
        }
        println!("Out-degree of {}: {}", vertex, out_degree);
        println!("In-degree of {}: {}", vertex, in_degree);
    }
    Ok(())
}

/// Print the destinations of a vertex's outgoing edges.
pub fn cmd_neighbors(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;
    let edges = graph.outgoing_edges(vertex);

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "edges": edges})
        );
    } else if edges.is_empty() {
        println!("{} has no outgoing edges", vertex);
    } else {
        println!("Neighbors of {}:", vertex);
        for edge in &edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Print every vertex with an edge into `vertex`.
pub fn cmd_predecessors(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;
    let predecessors = graph.predecessors(vertex);

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "predecessors": predecessors})
        );
    } else if predecessors.is_empty() {
        println!("{} has no predecessors", vertex);
    } else {
        println!("Predecessors of {}: {}", vertex, predecessors.join(", "));
    }
    Ok(())
}

/// Print the weight of one edge.
pub fn cmd_weight(path: &Path, origin: &str, destination: &str, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;
    let weight = graph.edge_weight(origin, destination);
    let exists = graph.has_edge(origin, destination);

    if json {
        // JSON has no infinity; a missing edge is reported as null.
        let weight = exists.then_some(weight);
        println!(
            "{}",
            serde_json::json!({
                "origin": origin,
                "destination": destination,
                "exists": exists,
                "weight": weight,
            })
        );
    } else if exists {
        println!("{} -> {}: {:?}", origin, destination, weight);
    } else {
        println!("No edge {} -> {}", origin, destination);
    }
    Ok(())
}

/// Print the visitation order of a traversal from `start`.
pub fn cmd_traverse(path: &Path, start: &str, order: TraversalOrder, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path)?;
    let visited = traverse(&graph, start, order);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "order": order.name(),
                "visited": visited,
            })
        );
    } else if visited.is_empty() {
        println!("Vertex {} not found", start);
    } else {
        println!("{} from {}: {}", order.name().to_uppercase(), start, visited.join(" "));
    }
    Ok(())
}
