//! Basic build -> query -> traverse flow.

use dgraph::*;

fn main() -> GraphResult<()> {
    // Create a new graph
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();

    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v)?;
    }

    // Link them
    graph.add_weighted_edge("A", "B", 5.0)?;
    graph.add_weighted_edge("A", "C", 3.0)?;
    graph.add_weighted_edge("B", "D", 2.0)?;
    graph.add_weighted_edge("C", "D", 1.0)?;
    graph.add_weighted_edge("D", "E", 4.0)?;
    graph.add_weighted_edge("B", "E", 6.0)?;

    println!("{}\n", graph);
    println!("Vertices: {}", graph.vertex_count());
    println!("Edges: {}", graph.edge_count());

    println!("Out-degree of A: {}", graph.out_degree("A"));
    println!("In-degree of D: {}", graph.in_degree("D"));
    println!("Neighbors of A: {:?}", graph.neighbors("A"));
    println!("Predecessors of D: {:?}", graph.predecessors("D"));

    println!("Edge A->B exists? {}", graph.has_edge("A", "B"));
    println!("Weight of A->B: {:?}", graph.edge_weight("A", "B"));

    println!("DFS from A: {:?}", graph.dfs("A"));
    println!("BFS from A: {:?}", graph.bfs("A"));

    graph.remove_edge("A", "C");
    println!("\nAfter removing A->C:\n{}", graph);

    // An absent identity is rejected before anything changes.
    if let Err(e) = graph.add_edge("A", None::<&str>) {
        println!("\nRejected: {}", e);
    }

    Ok(())
}
