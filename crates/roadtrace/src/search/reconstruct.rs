use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::error::SearchError;
use super::graph::RoadGraph;
use super::state::SearchState;
use super::types::{Algorithm, EdgeClass, EdgeId, Event, NodeId, Outcome, PathMetrics};

/// A route recovered from a run's predecessor tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Nodes from origin to destination.
    pub nodes: Vec<NodeId>,
    /// Edges from origin to destination.
    pub edges: Vec<EdgeId>,
    /// Sum of edge weights along the route.
    pub total_weight: f64,
    /// `None` when the route has no edges.
    pub metrics: Option<PathMetrics>,
    /// Path classifications, in the order the walk emitted them (destination first).
    pub events: Vec<Event>,
}

/// How many reconstructed routes used each edge, per algorithm.
///
/// Lives beside the graph so counts accumulate across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageLedger {
    uses: BTreeMap<(EdgeId, Algorithm), u64>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uses(&self, edge: EdgeId, algorithm: Algorithm) -> u64 {
        self.uses.get(&(edge, algorithm)).copied().unwrap_or(0)
    }

    /// Count one use of every edge in the route.
    pub fn record(&mut self, algorithm: Algorithm, route: &Reconstruction) {
        for &edge in &route.edges {
            *self.uses.entry((edge, algorithm)).or_insert(0) += 1;
        }
    }

    /// Non-zero counters in edge order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, Algorithm, u64)> + '_ {
        self.uses.iter().map(|(&(edge, algorithm), &n)| (edge, algorithm, n))
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }
}

/// Walk predecessor links from the state's destination back to its origin.
///
/// On success every edge of `state` is reset to unvisited and the route's edges
/// are classified as [`EdgeClass::Path`], both in the state and in the returned
/// events. When `ledger` is given, every edge on the route is counted under the
/// state's algorithm.
///
/// Fails with [`SearchError::NoPathFound`] unless the run terminated with
/// [`Outcome::Success`], or when the chain ends before reaching the origin. The
/// state is left untouched on failure.
pub fn reconstruct_path(
    graph: &RoadGraph,
    state: &mut SearchState,
    ledger: Option<&mut UsageLedger>,
) -> Result<Reconstruction, SearchError> {
    let origin = state.origin;
    let destination = state.destination;
    let no_path = || SearchError::NoPathFound {
        origin: graph.node(origin).key.clone(),
        destination: graph.node(destination).key.clone(),
    };

    if state.outcome != Some(Outcome::Success) {
        warn!(
            algorithm = %state.algorithm,
            outcome = ?state.outcome,
            "reconstruction requested before a successful run"
        );
        return Err(no_path());
    }

    let mut nodes = vec![destination];
    let mut edges = Vec::new();
    let mut events = Vec::new();
    let mut length = 0.0;
    let mut weight = 0.0;
    let mut speeds = Vec::new();

    let mut current = destination;
    while current != origin {
        let Some(previous) = state.node(current).previous else {
            warn!(
                algorithm = %state.algorithm,
                broken_at = %graph.node(current).key,
                "predecessor chain does not reach the origin"
            );
            return Err(no_path());
        };
        let edge_id = graph.edge_between(previous, current).ok_or_else(no_path)?;
        let edge = graph.edge(edge_id);
        length += edge.length;
        weight += edge.weight;
        speeds.push(edge.speed);
        events.push(Event::EdgeClassified {
            edge: edge_id,
            class: EdgeClass::Path,
        });
        edges.push(edge_id);
        nodes.push(previous);
        current = previous;
    }

    nodes.reverse();
    edges.reverse();

    state.reset_edges();
    for &edge in &edges {
        state.set_edge_class(edge, EdgeClass::Path);
    }

    let route = Reconstruction {
        nodes,
        edges,
        total_weight: weight,
        metrics: PathMetrics::from_parts(length, &speeds),
        events,
    };

    if let Some(ledger) = ledger {
        ledger.record(state.algorithm, &route);
    }

    debug!(
        algorithm = %state.algorithm,
        edges = route.edges.len(),
        total_weight = route.total_weight,
        "route reconstructed"
    );
    Ok(route)
}
