use std::collections::BinaryHeap;

use super::error::SearchError;
use super::graph::RoadGraph;
use super::run::{Run, Step};
use super::state::SearchState;
use super::types::{
    Algorithm, EdgeClass, Event, Heuristic, NodeId, Outcome, QueueEntry, SearchOptions,
};

/// A* search keyed by `f = g + h`.
///
/// There is no closed set: every pop expands its node again, including stale
/// entries, and neighbours are relaxed whenever their g-score strictly
/// improves. The Euclidean heuristic is measured in coordinate units scaled by
/// `heuristic_scale`; it is only admissible when that matches the weight units.
#[derive(Debug)]
pub struct AStar<'g> {
    run: Run<'g>,
    queue: BinaryHeap<QueueEntry>,
    options: SearchOptions,
}

impl<'g> AStar<'g> {
    /// Start a run. Fails if any edge weight is negative or NaN.
    pub fn new(
        graph: &'g RoadGraph,
        origin: NodeId,
        destination: NodeId,
        options: SearchOptions,
    ) -> Result<Self, SearchError> {
        if let Some((edge, weight)) = graph.first_invalid_weight() {
            return Err(SearchError::InvalidPrecondition { edge, weight });
        }

        let mut state = SearchState::new(graph, Algorithm::AStar, origin, destination);
        let h = estimate(graph, &options, origin, destination);
        let start = state.node_mut(origin);
        start.distance = 0.0;
        start.f_score = h;

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: h,
            node: origin,
        });

        Ok(Self {
            run: Run::new(graph, state),
            queue,
            options,
        })
    }

    pub fn state(&self) -> &SearchState {
        &self.run.state
    }

    pub fn into_state(self) -> SearchState {
        self.run.state
    }
}

fn estimate(graph: &RoadGraph, options: &SearchOptions, from: NodeId, to: NodeId) -> f64 {
    match options.heuristic {
        Heuristic::Euclidean => graph.euclidean(from, to) * options.heuristic_scale,
        Heuristic::Zero => 0.0,
    }
}

impl<'g> Step<'g> for AStar<'g> {
    fn run(&mut self) -> &mut Run<'g> {
        &mut self.run
    }

    fn step(&mut self) {
        let Some(QueueEntry { node, .. }) = self.queue.pop() else {
            self.run.terminate(Outcome::Exhausted);
            return;
        };

        self.run.finalize(node);
        if node == self.run.state.destination {
            self.run.terminate(Outcome::Success);
            return;
        }

        let graph = self.run.graph;
        let destination = self.run.state.destination;
        let g = self.run.state.node(node).distance;
        for &edge_id in graph.out_edges(node) {
            self.run.classify(edge_id, EdgeClass::Visited);
            let edge = graph.edge(edge_id);
            let tentative = g + edge.weight;
            if tentative < self.run.state.node(edge.to).distance {
                let f = tentative + estimate(graph, &self.options, edge.to, destination);
                let entry = self.run.state.node_mut(edge.to);
                entry.previous = Some(node);
                entry.distance = tentative;
                entry.f_score = f;
                self.queue.push(QueueEntry {
                    cost: f,
                    node: edge.to,
                });
                self.run.activate(edge.to);
            }
        }
    }
}

impl Iterator for AStar<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.next_event()
    }
}
