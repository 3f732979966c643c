use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dense index of a node in a [`RoadGraph`](super::graph::RoadGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Dense index of an edge in a [`RoadGraph`](super::graph::RoadGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Presentation class of an edge. Carries no algorithmic meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeClass {
    #[default]
    Unvisited,
    /// Leaves a node that has been expanded.
    Visited,
    /// Leaves a node whose tentative cost just improved.
    Active,
    /// Part of the reconstructed route.
    Path,
}

/// The search strategy driving an exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar]
    }

    /// Name used in config files, CLI flags and usage counters.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "a-star",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "a-star" | "astar" => Ok(Self::AStar),
            _ => Err(format!(
                "Invalid algorithm: {s}. Must be 'bfs', 'dijkstra', or 'a-star'."
            )),
        }
    }
}

/// How A* estimates the remaining cost to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Straight-line distance between node coordinates.
    #[default]
    Euclidean,
    /// Always zero; A* degenerates to Dijkstra.
    Zero,
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Self::Euclidean),
            "zero" => Ok(Self::Zero),
            _ => Err(format!(
                "Invalid heuristic: {s}. Must be 'euclidean' or 'zero'."
            )),
        }
    }
}

/// Tunables for a single exploration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    /// Multiplier converting coordinate distance into weight units.
    pub heuristic_scale: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            heuristic_scale: 1.0,
        }
    }
}

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The destination was taken off the frontier.
    Success,
    /// The frontier emptied before the destination was reached.
    Exhausted,
}

/// A discrete state change emitted while searching or reconstructing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Event {
    NodeFinalized { node: NodeId, distance: f64 },
    EdgeClassified { edge: EdgeId, class: EdgeClass },
    RunTerminated { outcome: Outcome },
}

/// Reporting metrics for a reconstructed route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMetrics {
    pub distance_km: f64,
    /// Arithmetic mean of per-edge speeds, not weighted by length.
    pub avg_speed_kmh: f64,
    pub total_time_min: f64,
}

impl PathMetrics {
    /// Compute metrics from a summed length in metres and per-edge speeds.
    ///
    /// Returns `None` when no speeds were collected.
    pub fn from_parts(total_length_m: f64, speeds: &[f64]) -> Option<Self> {
        if speeds.is_empty() {
            return None;
        }
        let distance_km = total_length_m / 1000.0;
        let avg_speed_kmh = speeds.iter().sum::<f64>() / speeds.len() as f64;
        Some(Self {
            distance_km,
            avg_speed_kmh,
            total_time_min: distance_km / avg_speed_kmh * 60.0,
        })
    }
}

/// Min-heap entry ordered by cost, then node index.
///
/// BinaryHeap is a max-heap, so the ordering is reversed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub cost: f64,
    pub node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then(other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
