//! Line-oriented edge-list input for populating a graph.
//!
//! ```text
//! # comment
//! A            isolated vertex
//! A B          edge of weight 1.0
//! A C 3.5      weighted edge
//! ```

use std::path::Path;

use crate::graph::DirectedGraph;
use crate::types::{GraphError, GraphResult};

/// Parse edge-list text into a graph of string vertices.
pub fn parse_edge_list(text: &str) -> GraphResult<DirectedGraph<String>> {
    let mut graph = DirectedGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [vertex] => {
                graph.add_vertex(vertex.to_string())?;
            }
            [origin, destination] => {
                add_line_edge(&mut graph, line_no, origin, destination, None)?;
            }
            [origin, destination, weight] => {
                let weight: f64 = weight.parse().map_err(|_| GraphError::Parse {
                    line: line_no,
                    reason: format!("invalid weight '{}'", weight),
                })?;
                add_line_edge(&mut graph, line_no, origin, destination, Some(weight))?;
            }
            _ => {
                return Err(GraphError::Parse {
                    line: line_no,
                    reason: format!("expected 1 to 3 fields, found {}", fields.len()),
                });
            }
        }
    }

    Ok(graph)
}

/// Read and parse an edge-list file.
pub fn load_edge_list(path: &Path) -> GraphResult<DirectedGraph<String>> {
    let text = std::fs::read_to_string(path)?;
    let graph = parse_edge_list(&text)?;
    log::info!(
        "loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

fn add_line_edge(
    graph: &mut DirectedGraph<String>,
    line_no: usize,
    origin: &str,
    destination: &str,
    weight: Option<f64>,
) -> GraphResult<()> {
    let added = match weight {
        Some(w) => graph.add_weighted_edge(origin.to_string(), destination.to_string(), w)?,
        None => graph.add_edge(origin.to_string(), destination.to_string())?,
    };
    if !added {
        log::warn!(
            "line {}: edge {} -> {} already exists, keeping the first weight",
            line_no,
            origin,
            destination
        );
    }
    Ok(())
}
