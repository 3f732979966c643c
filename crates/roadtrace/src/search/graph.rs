use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SearchError;
use super::types::{EdgeId, NodeId};

/// A road intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Opaque key from the source data.
    pub key: String,
    pub x: f64,
    pub y: f64,
}

/// A directed road segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Traversal cost, already derived upstream as length / speed.
    pub weight: f64,
    /// Physical length in metres.
    pub length: f64,
    /// Speed in km/h.
    pub speed: f64,
}

/// The immutable road network searched by every algorithm.
///
/// Nodes and edges are stored in arenas indexed by [`NodeId`] and [`EdgeId`].
/// Parallel edges are kept, but adjacency only exposes the first edge (in input
/// order) for each ordered node pair.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, NodeId>,
    /// For each node, the first edge to each distinct target, in input order.
    adjacency: Vec<Vec<EdgeId>>,
    /// First edge for each ordered node pair.
    first_edge: HashMap<(NodeId, NodeId), EdgeId>,
}

impl RoadGraph {
    /// Build a graph from nodes and edge records naming their endpoints by key.
    pub fn new(nodes: Vec<Node>, edges: Vec<EdgeRecord>) -> Result<Self, SearchError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.key.clone(), NodeId(i)).is_some() {
                return Err(SearchError::DuplicateNode(node.key.clone()));
            }
        }

        let mut arena = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut first_edge = HashMap::with_capacity(edges.len());

        for record in edges {
            let (Some(&from), Some(&to)) = (index.get(&record.from.0), index.get(&record.to.0))
            else {
                return Err(SearchError::DanglingEdge {
                    from: record.from.0,
                    to: record.to.0,
                });
            };
            let id = EdgeId(arena.len());
            arena.push(Edge {
                from,
                to,
                weight: record.weight,
                length: record.length,
                speed: record.speed,
            });
            if !first_edge.contains_key(&(from, to)) {
                first_edge.insert((from, to), id);
                adjacency[from.index()].push(id);
            }
        }

        Ok(Self {
            nodes,
            edges: arena,
            index,
            adjacency,
            first_edge,
        })
    }

    /// Build a graph from its on-disk document form.
    pub fn from_document(doc: GraphDocument) -> Result<Self, SearchError> {
        let nodes = doc
            .nodes
            .into_iter()
            .map(|n| Node {
                key: n.id.0,
                x: n.x,
                y: n.y,
            })
            .collect();
        Self::new(nodes, doc.edges)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges hidden behind an earlier edge with the same endpoints.
    pub fn parallel_edge_count(&self) -> usize {
        self.edges.len() - self.first_edge.len()
    }

    pub fn node_id(&self, key: &str) -> Result<NodeId, SearchError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(key.to_string()))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Outgoing edges of a node, one per distinct target, in input order.
    pub fn out_edges(&self, id: NodeId) -> &[EdgeId] {
        &self.adjacency[id.index()]
    }

    /// The first edge from `from` to `to`, if any.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.first_edge.get(&(from, to)).copied()
    }

    /// Straight-line distance between two node coordinates.
    pub fn euclidean(&self, a: NodeId, b: NodeId) -> f64 {
        let a = self.node(a);
        let b = self.node(b);
        (b.x - a.x).hypot(b.y - a.y)
    }

    /// First edge whose weight is negative or not a number.
    pub fn first_invalid_weight(&self) -> Option<(EdgeId, f64)> {
        self.edges()
            .find(|(_, e)| e.weight.is_nan() || e.weight < 0.0)
            .map(|(id, e)| (id, e.weight))
    }
}

/// Node key as it appears in a graph file. Integers are accepted and stringified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawKey", into = "String")]
pub struct NodeKey(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Int(i64),
    Text(String),
}

impl From<RawKey> for NodeKey {
    fn from(raw: RawKey) -> Self {
        match raw {
            RawKey::Int(n) => Self(n.to_string()),
            RawKey::Text(s) => Self(s),
        }
    }
}

impl From<NodeKey> for String {
    fn from(key: NodeKey) -> Self {
        key.0
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeKey,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeKey,
    pub to: NodeKey,
    pub weight: f64,
    pub length: f64,
    pub speed: f64,
}

/// Serialized road graph, as produced by the upstream extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn from_yaml(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Read a document from disk; `.json` files are parsed as JSON, anything else as YAML.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let doc = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        Ok(doc)
    }
}
