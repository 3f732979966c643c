use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use std::path::Path;

use roadtrace::{Algorithm, RoadGraph, RouteReport, SearchError, UsageLedger, find_route};

use super::load_graph;
use super::route::print_metrics;
use crate::config::Config;

/// Run every algorithm between the same two nodes and print a comparison.
///
/// The runs only read the graph, so they execute in parallel; usage counts are
/// recorded afterwards in algorithm order.
pub fn run(path: &Path, from: &str, to: &str) -> Result<()> {
    let graph = load_graph(path)?;
    graph.node_id(from)?;
    graph.node_id(to)?;
    let options = Config::load_or_default().search_options();

    let results: Vec<(Algorithm, Result<RouteReport, SearchError>)> = Algorithm::all()
        .par_iter()
        .map(|&algorithm| {
            (
                algorithm,
                find_route(&graph, algorithm, options, from, to, None),
            )
        })
        .collect();

    let mut ledger = UsageLedger::new();
    let mut found = 0;
    for (algorithm, result) in &results {
        println!("{}", algorithm.display_name().bold());
        match result {
            Ok(report) => {
                found += 1;
                ledger.record(*algorithm, &report.route);
                println!(
                    "  {} edge(s), {} expansion(s), {} node(s) visited, total weight {:.3}",
                    report.route.edges.len(),
                    report.state.steps,
                    report.state.visited_count(),
                    report.route.total_weight
                );
                print_metrics(report.route.metrics.as_ref());
            }
            Err(e) => println!("  {}", e.to_string().red()),
        }
    }

    if found > 1 {
        print_shared_edges(&graph, &ledger, found as u64);
    }
    Ok(())
}

/// List edges used by every successful route.
fn print_shared_edges(graph: &RoadGraph, ledger: &UsageLedger, found: u64) {
    let shared: Vec<_> = graph
        .edges()
        .filter(|(id, _)| {
            Algorithm::all()
                .iter()
                .map(|&a| ledger.uses(*id, a))
                .sum::<u64>()
                == found
        })
        .map(|(_, e)| format!("{}->{}", graph.node(e.from).key, graph.node(e.to).key))
        .collect();
    if shared.is_empty() {
        println!("\n{}", "No edge is shared by every route.".dimmed());
    } else {
        println!("\nShared by every route: {}", shared.join(", "));
    }
}
