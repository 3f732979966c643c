pub mod astar;
pub mod bfs;
pub mod dijkstra;
pub mod error;
pub mod frames;
pub mod graph;
pub mod reconstruct;
mod run;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

use astar::AStar;
use bfs::Bfs;
use dijkstra::Dijkstra;
use error::SearchError;
use graph::RoadGraph;
use reconstruct::{Reconstruction, UsageLedger, reconstruct_path};
use state::SearchState;
use types::{Algorithm, Event, Outcome, SearchOptions};

/// A running traversal, whichever algorithm drives it.
///
/// Iterating yields state-change events lazily: `next` only advances the
/// frontier until another event is available. The last event is always
/// [`Event::RunTerminated`].
#[derive(Debug)]
pub enum Exploration<'g> {
    Bfs(Bfs<'g>),
    Dijkstra(Dijkstra<'g>),
    AStar(AStar<'g>),
}

impl<'g> Exploration<'g> {
    /// Start a traversal between two node keys.
    ///
    /// # Arguments
    /// * `graph` — The road graph; borrowed for the lifetime of the run.
    /// * `algorithm` — Which strategy to use.
    /// * `options` — Heuristic settings (only read by A*).
    /// * `origin`, `destination` — Node keys as they appear in the graph.
    ///
    /// # Errors
    /// `UnknownNode` for a missing key, `InvalidPrecondition` when Dijkstra or
    /// A* meets a negative weight.
    pub fn start(
        graph: &'g RoadGraph,
        algorithm: Algorithm,
        options: SearchOptions,
        origin: &str,
        destination: &str,
    ) -> Result<Self, SearchError> {
        let origin = graph.node_id(origin)?;
        let destination = graph.node_id(destination)?;
        Ok(match algorithm {
            Algorithm::Bfs => Self::Bfs(Bfs::new(graph, origin, destination)),
            Algorithm::Dijkstra => Self::Dijkstra(Dijkstra::new(graph, origin, destination)?),
            Algorithm::AStar => Self::AStar(AStar::new(graph, origin, destination, options)?),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state().algorithm
    }

    pub fn state(&self) -> &SearchState {
        match self {
            Self::Bfs(s) => s.state(),
            Self::Dijkstra(s) => s.state(),
            Self::AStar(s) => s.state(),
        }
    }

    /// `None` until the run has terminated.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state().outcome
    }

    /// Drain remaining events and return the final state.
    pub fn finish(mut self) -> SearchState {
        self.by_ref().for_each(drop);
        match self {
            Self::Bfs(s) => s.into_state(),
            Self::Dijkstra(s) => s.into_state(),
            Self::AStar(s) => s.into_state(),
        }
    }
}

impl Iterator for Exploration<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        match self {
            Self::Bfs(s) => s.next(),
            Self::Dijkstra(s) => s.next(),
            Self::AStar(s) => s.next(),
        }
    }
}

/// A finished search together with its reconstructed route.
#[derive(Debug, Clone)]
pub struct RouteReport {
    pub state: SearchState,
    pub route: Reconstruction,
}

/// Run a search to completion and reconstruct the route.
///
/// Exhaustion surfaces as [`SearchError::NoPathFound`]; a partial path is never
/// returned.
pub fn find_route(
    graph: &RoadGraph,
    algorithm: Algorithm,
    options: SearchOptions,
    origin: &str,
    destination: &str,
    ledger: Option<&mut UsageLedger>,
) -> Result<RouteReport, SearchError> {
    let mut state = Exploration::start(graph, algorithm, options, origin, destination)?.finish();
    if state.outcome != Some(Outcome::Success) {
        return Err(SearchError::NoPathFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    }
    let route = reconstruct_path(graph, &mut state, ledger)?;
    Ok(RouteReport { state, route })
}
