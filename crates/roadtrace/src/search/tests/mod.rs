mod astar;
mod documents;

use super::graph::{EdgeRecord, Node, RoadGraph};
use super::types::{Algorithm, Event, NodeId, Outcome, SearchOptions};
use super::{Exploration, RouteReport, find_route};

/// Helper to create a Node.
fn node(key: &str, x: f64, y: f64) -> Node {
    Node {
        key: key.to_string(),
        x,
        y,
    }
}

/// Helper to create an edge with the given weight, 1 km long at 60 km/h.
fn edge(from: &str, to: &str, weight: f64) -> EdgeRecord {
    edge_full(from, to, weight, 1000.0, 60.0)
}

/// Helper to create an edge with explicit length and speed.
fn edge_full(from: &str, to: &str, weight: f64, length: f64, speed: f64) -> EdgeRecord {
    EdgeRecord {
        from: from.into(),
        to: to.into(),
        weight,
        length,
        speed,
    }
}

/// Build a graph from nodes laid out on the x axis in key order.
fn graph(keys: &[&str], edges: Vec<EdgeRecord>) -> RoadGraph {
    let nodes = keys
        .iter()
        .enumerate()
        .map(|(i, k)| node(k, i as f64, 0.0))
        .collect();
    RoadGraph::new(nodes, edges).unwrap()
}

/// A→B (1), B→D (1), A→C (1), C→D (5).
fn diamond() -> RoadGraph {
    graph(
        &["A", "B", "C", "D"],
        vec![
            edge("A", "B", 1.0),
            edge("B", "D", 1.0),
            edge("A", "C", 1.0),
            edge("C", "D", 5.0),
        ],
    )
}

/// Run a search to completion and return the report, panicking on failure.
fn route(graph: &RoadGraph, algorithm: Algorithm, from: &str, to: &str) -> RouteReport {
    find_route(graph, algorithm, SearchOptions::default(), from, to, None)
        .unwrap_or_else(|e| panic!("{algorithm} {from} -> {to} failed: {e}"))
}

/// Keys of the route's nodes, origin first.
fn route_keys(graph: &RoadGraph, report: &RouteReport) -> Vec<String> {
    report
        .route
        .nodes
        .iter()
        .map(|&id| graph.node(id).key.clone())
        .collect()
}

/// Collect every event of a run.
fn events(
    graph: &RoadGraph,
    algorithm: Algorithm,
    options: SearchOptions,
    from: &str,
    to: &str,
) -> Vec<Event> {
    Exploration::start(graph, algorithm, options, from, to)
        .unwrap()
        .collect()
}

fn terminal(events: &[Event]) -> Outcome {
    match events.last() {
        Some(Event::RunTerminated { outcome }) => *outcome,
        other => panic!("stream did not end with RunTerminated: {other:?}"),
    }
}

/// Deterministic xorshift generator so test graphs need no external crate.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Random directed graph with `n` nodes, integer weights 1..=9 and coordinates
/// on a unit grid.
fn random_graph(seed: u64, n: usize, edge_count: usize) -> RoadGraph {
    let mut rng = Rng(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1);
    let keys: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
    let nodes = keys
        .iter()
        .map(|k| node(k, rng.below(10) as f64, rng.below(10) as f64))
        .collect();
    let edges = (0..edge_count)
        .filter_map(|_| {
            let from = rng.below(n as u64) as usize;
            let to = rng.below(n as u64) as usize;
            (from != to).then(|| edge(&keys[from], &keys[to], (rng.below(9) + 1) as f64))
        })
        .collect();
    RoadGraph::new(nodes, edges).unwrap()
}

/// Exhaustive search over simple paths: (minimum total weight, minimum edge count).
fn brute_force(graph: &RoadGraph, from: NodeId, to: NodeId) -> Option<(f64, usize)> {
    fn walk(
        graph: &RoadGraph,
        at: NodeId,
        to: NodeId,
        on_path: &mut Vec<bool>,
        weight: f64,
        hops: usize,
        best: &mut Option<(f64, usize)>,
    ) {
        if at == to {
            let (w, h) = best.get_or_insert((weight, hops));
            *w = w.min(weight);
            *h = (*h).min(hops);
            return;
        }
        for &edge_id in graph.out_edges(at) {
            let edge = graph.edge(edge_id);
            if on_path[edge.to.index()] {
                continue;
            }
            on_path[edge.to.index()] = true;
            walk(graph, edge.to, to, on_path, weight + edge.weight, hops + 1, best);
            on_path[edge.to.index()] = false;
        }
    }

    let mut on_path = vec![false; graph.node_count()];
    on_path[from.index()] = true;
    let mut best = None;
    walk(graph, from, to, &mut on_path, 0.0, 0, &mut best);
    best
}
