use thiserror::Error;

use super::types::EdgeId;

/// Errors produced by graph construction, traversal and reconstruction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The frontier emptied, or the predecessor chain broke, before the
    /// destination was connected to the origin.
    #[error("no path found from {origin} to {destination}")]
    NoPathFound { origin: String, destination: String },

    /// Dijkstra and A* require every weight to be a non-negative number.
    #[error("edge {edge} has weight {weight}; weights must be non-negative")]
    InvalidPrecondition { edge: EdgeId, weight: f64 },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    #[error("edge {from} -> {to} references a node that does not exist")]
    DanglingEdge { from: String, to: String },
}
