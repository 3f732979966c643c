use crate::search::error::SearchError;
use crate::search::graph::{GraphDocument, RoadGraph};
use crate::search::types::Algorithm;

use super::*;

const YAML: &str = r#"
nodes:
  - { id: 65336339, x: -122.41, y: 37.77 }
  - { id: 258757444, x: -122.40, y: 37.78 }
  - { id: "junction", x: -122.42, y: 37.78 }
edges:
  - { from: 65336339, to: "junction", weight: 25.0, length: 1000.0, speed: 40 }
  - { from: "junction", to: 258757444, weight: 20.0, length: 800.0, speed: 40 }
"#;

#[test]
fn yaml_accepts_integer_and_string_keys() {
    let doc = GraphDocument::from_yaml(YAML).unwrap();
    let g = RoadGraph::from_document(doc).unwrap();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    let report = route(&g, Algorithm::Dijkstra, "65336339", "258757444");
    assert_eq!(route_keys(&g, &report), ["65336339", "junction", "258757444"]);
    assert_eq!(report.route.metrics.unwrap().distance_km, 1.8);
}

#[test]
fn json_document() {
    let json = r#"{
        "nodes": [{"id": 1, "x": 0, "y": 0}, {"id": 2, "x": 1, "y": 0}],
        "edges": [{"from": 1, "to": 2, "weight": 1.5, "length": 100, "speed": 30}]
    }"#;
    let g = RoadGraph::from_document(GraphDocument::from_json(json).unwrap()).unwrap();
    let report = route(&g, Algorithm::Bfs, "1", "2");
    assert_eq!(report.route.total_weight, 1.5);
}

#[test]
fn duplicate_node_rejected() {
    let doc =
        GraphDocument::from_yaml("nodes:\n  - { id: 1, x: 0, y: 0 }\n  - { id: \"1\", x: 1, y: 1 }\n")
            .unwrap();
    assert_eq!(
        RoadGraph::from_document(doc).unwrap_err(),
        SearchError::DuplicateNode("1".to_string())
    );
}

#[test]
fn dangling_edge_rejected() {
    let doc = GraphDocument::from_yaml(
        "nodes:\n  - { id: a, x: 0, y: 0 }\nedges:\n  - { from: a, to: b, weight: 1, length: 1, speed: 1 }\n",
    )
    .unwrap();
    assert!(matches!(
        RoadGraph::from_document(doc),
        Err(SearchError::DanglingEdge { .. })
    ));
}

#[test]
fn empty_document_builds_empty_graph() {
    let g = RoadGraph::from_document(GraphDocument::from_yaml("{}").unwrap()).unwrap();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.first_invalid_weight(), None);
}

#[test]
fn out_edges_follow_input_order() {
    let g = diamond();
    let a = g.node_id("A").unwrap();
    let targets: Vec<&str> = g
        .out_edges(a)
        .iter()
        .map(|&e| g.node(g.edge(e).to).key.as_str())
        .collect();
    assert_eq!(targets, ["B", "C"]);
}

#[test]
fn events_serialize_with_kind_tag() {
    let g = diamond();
    let options = crate::search::types::SearchOptions::default();
    let first = events(&g, Algorithm::Dijkstra, options, "A", "D")
        .into_iter()
        .next()
        .unwrap();
    let json = serde_json::to_string(&first).unwrap();
    assert_eq!(json, r#"{"kind":"node-finalized","node":0,"distance":0.0}"#);
}
