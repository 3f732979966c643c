use super::graph::RoadGraph;
use super::types::{Algorithm, EdgeClass, EdgeId, NodeId, Outcome};

/// Marker size given to the origin and destination for rendering.
pub const ORIGIN_MARKER_SIZE: f64 = 50.0;

/// Transient per-node fields written by a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub visited: bool,
    /// Tentative distance (Dijkstra), g-score (A*) or hop depth (BFS).
    pub distance: f64,
    /// A* only.
    pub f_score: f64,
    pub previous: Option<NodeId>,
    pub marker_size: f64,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visited: false,
            distance: f64::INFINITY,
            f_score: f64::INFINITY,
            previous: None,
            marker_size: 0.0,
        }
    }
}

/// Mutable state of a single traversal, kept apart from the immutable graph.
///
/// A fresh state is built for every run, so nothing carries over between
/// successive searches on the same graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub algorithm: Algorithm,
    pub origin: NodeId,
    pub destination: NodeId,
    nodes: Vec<NodeState>,
    edges: Vec<EdgeClass>,
    /// Number of frontier pops that led to an expansion.
    pub steps: usize,
    pub outcome: Option<Outcome>,
}

impl SearchState {
    pub fn new(
        graph: &RoadGraph,
        algorithm: Algorithm,
        origin: NodeId,
        destination: NodeId,
    ) -> Self {
        let mut nodes = vec![NodeState::default(); graph.node_count()];
        nodes[destination.index()].marker_size = ORIGIN_MARKER_SIZE;
        nodes[origin.index()].marker_size = ORIGIN_MARKER_SIZE;
        Self {
            algorithm,
            origin,
            destination,
            nodes,
            edges: vec![EdgeClass::Unvisited; graph.edge_count()],
            steps: 0,
            outcome: None,
        }
    }

    pub fn node(&self, id: NodeId) -> &NodeState {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut NodeState {
        &mut self.nodes[id.index()]
    }

    pub fn edge_class(&self, id: EdgeId) -> EdgeClass {
        self.edges[id.index()]
    }

    pub fn set_edge_class(&mut self, id: EdgeId, class: EdgeClass) {
        self.edges[id.index()] = class;
    }

    /// Return every edge to [`EdgeClass::Unvisited`].
    pub fn reset_edges(&mut self) {
        self.edges.fill(EdgeClass::Unvisited);
    }

    /// Predecessor of every node, indexed by node; the predecessor tree of the run.
    pub fn predecessors(&self) -> Vec<Option<NodeId>> {
        self.nodes.iter().map(|n| n.previous).collect()
    }

    pub fn visited_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visited).count()
    }

    /// Count of edges currently in the given class.
    pub fn edges_in(&self, class: EdgeClass) -> usize {
        self.edges.iter().filter(|&&c| c == class).count()
    }
}
