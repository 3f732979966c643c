use std::collections::VecDeque;

use tracing::{debug, trace};

use super::graph::RoadGraph;
use super::state::SearchState;
use super::types::{EdgeClass, EdgeId, Event, NodeId, Outcome};

/// Bookkeeping shared by every traversal: the graph, the run's state, and the
/// events produced by the current step that have not been pulled yet.
#[derive(Debug)]
pub(crate) struct Run<'g> {
    pub graph: &'g RoadGraph,
    pub state: SearchState,
    pending: VecDeque<Event>,
}

impl<'g> Run<'g> {
    pub fn new(graph: &'g RoadGraph, state: SearchState) -> Self {
        debug!(
            algorithm = %state.algorithm,
            origin = %graph.node(state.origin).key,
            destination = %graph.node(state.destination).key,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "starting search"
        );
        Self {
            graph,
            state,
            pending: VecDeque::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.outcome.is_some()
    }

    pub fn pop_pending(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    /// Mark a node visited and record its distance as settled.
    pub fn finalize(&mut self, node: NodeId) {
        let entry = self.state.node_mut(node);
        entry.visited = true;
        let distance = entry.distance;
        self.state.steps += 1;
        trace!(node = %self.graph.node(node).key, distance, "node finalized");
        self.pending.push_back(Event::NodeFinalized { node, distance });
    }

    pub fn classify(&mut self, edge: EdgeId, class: EdgeClass) {
        self.state.set_edge_class(edge, class);
        self.pending.push_back(Event::EdgeClassified { edge, class });
    }

    /// Classify every outgoing edge of `node` as active.
    pub fn activate(&mut self, node: NodeId) {
        let graph = self.graph;
        for &edge in graph.out_edges(node) {
            self.classify(edge, EdgeClass::Active);
        }
    }

    pub fn terminate(&mut self, outcome: Outcome) {
        debug!(
            algorithm = %self.state.algorithm,
            ?outcome,
            steps = self.state.steps,
            visited = self.state.visited_count(),
            "search finished"
        );
        self.state.outcome = Some(outcome);
        self.pending.push_back(Event::RunTerminated { outcome });
    }
}

/// A traversal that advances one frontier pop at a time.
pub(crate) trait Step<'g> {
    fn run(&mut self) -> &mut Run<'g>;

    /// Pop one frontier entry, pushing any resulting events.
    fn step(&mut self);

    /// Pull the next event, stepping the traversal until one is available.
    fn next_event(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.run().pop_pending() {
                return Some(event);
            }
            if self.run().is_finished() {
                return None;
            }
            self.step();
        }
    }
}
