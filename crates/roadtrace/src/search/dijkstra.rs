use std::collections::BinaryHeap;

use super::error::SearchError;
use super::graph::RoadGraph;
use super::run::{Run, Step};
use super::state::SearchState;
use super::types::{Algorithm, EdgeClass, Event, NodeId, Outcome, QueueEntry};

/// Dijkstra's algorithm with lazy deletion.
///
/// A node may sit in the queue several times with different distances; only its
/// first pop finalizes it and later pops are skipped. The run succeeds when the
/// destination is popped, not when it is first reached.
#[derive(Debug)]
pub struct Dijkstra<'g> {
    run: Run<'g>,
    queue: BinaryHeap<QueueEntry>,
}

impl<'g> Dijkstra<'g> {
    /// Start a run. Fails if any edge weight is negative or NaN.
    pub fn new(
        graph: &'g RoadGraph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Self, SearchError> {
        if let Some((edge, weight)) = graph.first_invalid_weight() {
            return Err(SearchError::InvalidPrecondition { edge, weight });
        }

        let mut state = SearchState::new(graph, Algorithm::Dijkstra, origin, destination);
        state.node_mut(origin).distance = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: 0.0,
            node: origin,
        });

        Ok(Self {
            run: Run::new(graph, state),
            queue,
        })
    }

    pub fn state(&self) -> &SearchState {
        &self.run.state
    }

    pub fn into_state(self) -> SearchState {
        self.run.state
    }
}

impl<'g> Step<'g> for Dijkstra<'g> {
    fn run(&mut self) -> &mut Run<'g> {
        &mut self.run
    }

    fn step(&mut self) {
        let Some(QueueEntry { node, .. }) = self.queue.pop() else {
            self.run.terminate(Outcome::Exhausted);
            return;
        };
        // Stale entry for an already finalized node.
        if self.run.state.node(node).visited {
            return;
        }

        self.run.finalize(node);
        if node == self.run.state.destination {
            self.run.terminate(Outcome::Success);
            return;
        }

        let graph = self.run.graph;
        let distance = self.run.state.node(node).distance;
        for &edge_id in graph.out_edges(node) {
            self.run.classify(edge_id, EdgeClass::Visited);
            let edge = graph.edge(edge_id);
            let candidate = distance + edge.weight;
            let entry = self.run.state.node_mut(edge.to);
            if candidate < entry.distance {
                entry.distance = candidate;
                entry.previous = Some(node);
                self.queue.push(QueueEntry {
                    cost: candidate,
                    node: edge.to,
                });
                self.run.activate(edge.to);
            }
        }
    }
}

impl Iterator for Dijkstra<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.next_event()
    }
}
