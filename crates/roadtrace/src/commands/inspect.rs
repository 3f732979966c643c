use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::load_graph;

/// Print node, edge and parallel-edge counts for a graph file.
pub fn run(path: &Path) -> Result<()> {
    let graph = load_graph(path)?;

    let sinks = graph
        .node_ids()
        .filter(|&id| graph.out_edges(id).is_empty())
        .count();

    println!("{}", path.display().to_string().bold());
    println!("  nodes           {}", graph.node_count());
    println!("  edges           {}", graph.edge_count());
    println!("  parallel edges  {}", graph.parallel_edge_count());
    println!("  dead ends       {sinks}");

    if let Some((edge, weight)) = graph.first_invalid_weight() {
        println!(
            "{}",
            format!("Edge {edge} has weight {weight}; Dijkstra and A* will refuse this graph.")
                .yellow()
        );
    }
    Ok(())
}
