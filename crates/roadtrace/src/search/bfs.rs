use std::collections::VecDeque;

use super::graph::RoadGraph;
use super::run::{Run, Step};
use super::state::SearchState;
use super::types::{Algorithm, EdgeClass, Event, NodeId, Outcome};

/// Breadth-first search over an unweighted view of the graph.
///
/// Each node is enqueued at most once, the first time it is discovered, so the
/// predecessor tree always describes a path with the fewest edges. A node's
/// `distance` is its hop depth.
#[derive(Debug)]
pub struct Bfs<'g> {
    run: Run<'g>,
    queue: VecDeque<NodeId>,
    discovered: Vec<bool>,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g RoadGraph, origin: NodeId, destination: NodeId) -> Self {
        let mut state = SearchState::new(graph, Algorithm::Bfs, origin, destination);
        state.node_mut(origin).distance = 0.0;

        let mut discovered = vec![false; graph.node_count()];
        discovered[origin.index()] = true;

        Self {
            run: Run::new(graph, state),
            queue: VecDeque::from([origin]),
            discovered,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.run.state
    }

    pub fn into_state(self) -> SearchState {
        self.run.state
    }
}

impl<'g> Step<'g> for Bfs<'g> {
    fn run(&mut self) -> &mut Run<'g> {
        &mut self.run
    }

    fn step(&mut self) {
        let Some(node) = self.queue.pop_front() else {
            self.run.terminate(Outcome::Exhausted);
            return;
        };
        self.run.finalize(node);
        if node == self.run.state.destination {
            self.run.terminate(Outcome::Success);
            return;
        }

        let graph = self.run.graph;
        let depth = self.run.state.node(node).distance;
        for &edge in graph.out_edges(node) {
            self.run.classify(edge, EdgeClass::Visited);
            let neighbor = graph.edge(edge).to;
            if self.discovered[neighbor.index()] {
                continue;
            }
            self.discovered[neighbor.index()] = true;
            let entry = self.run.state.node_mut(neighbor);
            entry.previous = Some(node);
            entry.distance = depth + 1.0;
            self.queue.push_back(neighbor);
            self.run.activate(neighbor);
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.next_event()
    }
}
