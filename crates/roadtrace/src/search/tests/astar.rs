use super::*;
use crate::search::error::SearchError;
use crate::search::graph::RoadGraph;
use crate::search::types::Heuristic;

const ZERO: SearchOptions = SearchOptions {
    heuristic: Heuristic::Zero,
    heuristic_scale: 1.0,
};

/// Grid graph whose edge weights equal the Euclidean length between nodes,
/// making the straight-line heuristic admissible.
fn metric_grid(size: usize, seed: u64) -> RoadGraph {
    let mut rng = Rng(seed | 1);
    let key = |r: usize, c: usize| format!("{r}:{c}");
    let mut nodes = Vec::new();
    for r in 0..size {
        for c in 0..size {
            nodes.push(node(&key(r, c), c as f64, r as f64));
        }
    }
    let mut edges = Vec::new();
    for r in 0..size {
        for c in 0..size {
            if c + 1 < size {
                // Detours make some straight roads slower than their length.
                let w = 1.0 + rng.below(3) as f64;
                edges.push(edge(&key(r, c), &key(r, c + 1), w));
                edges.push(edge(&key(r, c + 1), &key(r, c), w));
            }
            if r + 1 < size {
                let w = 1.0 + rng.below(3) as f64;
                edges.push(edge(&key(r, c), &key(r + 1, c), w));
                edges.push(edge(&key(r + 1, c), &key(r, c), w));
            }
            if r + 1 < size && c + 1 < size {
                edges.push(edge(&key(r, c), &key(r + 1, c + 1), 2f64.sqrt()));
            }
        }
    }
    RoadGraph::new(nodes, edges).unwrap()
}

#[test]
fn zero_heuristic_matches_dijkstra() {
    for seed in 1..=30 {
        let g = random_graph(seed, 7, 14);
        for from in g.node_ids() {
            for to in g.node_ids() {
                let (from, to) = (&g.node(from).key, &g.node(to).key);
                let dijkstra = find_route(&g, Algorithm::Dijkstra, ZERO, from, to, None);
                let astar = find_route(&g, Algorithm::AStar, ZERO, from, to, None);
                match (dijkstra, astar) {
                    (Ok(d), Ok(a)) => assert_eq!(d.route.total_weight, a.route.total_weight),
                    (Err(d), Err(a)) => assert_eq!(d, a),
                    (d, a) => panic!("seed {seed}: {from} -> {to}: {d:?} vs {a:?}"),
                }
            }
        }
    }
}

#[test]
fn euclidean_heuristic_matches_dijkstra_on_metric_graph() {
    for seed in [3, 11, 29] {
        let g = metric_grid(5, seed);
        for to in ["4:4", "0:4", "4:0", "2:3"] {
            let dijkstra = route(&g, Algorithm::Dijkstra, "0:0", to);
            let astar = route(&g, Algorithm::AStar, "0:0", to);
            assert!(
                (dijkstra.route.total_weight - astar.route.total_weight).abs() < 1e-9,
                "seed {seed} to {to}: {} vs {}",
                dijkstra.route.total_weight,
                astar.route.total_weight
            );
        }
    }
}

#[test]
fn diamond_takes_cheaper_branch() {
    let g = diamond();
    let report = route(&g, Algorithm::AStar, "A", "D");
    assert_eq!(route_keys(&g, &report), ["A", "B", "D"]);
    assert_eq!(report.route.total_weight, 2.0);
}

#[test]
fn f_score_is_g_plus_heuristic() {
    // Nodes sit on the x axis at 0, 1, 2, 3.
    let g = diamond();
    let report = route(&g, Algorithm::AStar, "A", "D");
    let b = g.node_id("B").unwrap();
    let state = report.state.node(b);
    assert_eq!(state.distance, 1.0);
    assert_eq!(state.f_score, 1.0 + 2.0);
}

#[test]
fn heuristic_scale_multiplies_estimate() {
    let g = diamond();
    let options = SearchOptions {
        heuristic: Heuristic::Euclidean,
        heuristic_scale: 0.5,
    };
    let report = find_route(&g, Algorithm::AStar, options, "A", "D", None).unwrap();
    let b = g.node_id("B").unwrap();
    assert_eq!(report.state.node(b).f_score, 1.0 + 1.0);
}

#[test]
fn popped_nodes_are_expanded_again() {
    // An inadmissible heuristic pops C through the expensive edge first, then
    // again after B improves it. Without a closed set C is expanded twice.
    let nodes = vec![
        node("A", 0.0, 0.0),
        node("B", 0.0, 100.0),
        node("C", 1.0, 0.0),
        node("D", 2.0, 0.0),
    ];
    let g = RoadGraph::new(
        nodes,
        vec![
            edge("A", "B", 1.0),
            edge("A", "C", 10.0),
            edge("B", "C", 1.0),
            edge("C", "D", 200.0),
        ],
    )
    .unwrap();
    let events = events(&g, Algorithm::AStar, SearchOptions::default(), "A", "D");
    let c = g.node_id("C").unwrap();
    let pops: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            Event::NodeFinalized { node, distance } if *node == c => Some(*distance),
            _ => None,
        })
        .collect();
    assert_eq!(pops, [10.0, 2.0]);
    assert_eq!(terminal(&events), Outcome::Success);

    let report =
        find_route(&g, Algorithm::AStar, SearchOptions::default(), "A", "D", None).unwrap();
    assert_eq!(route_keys(&g, &report), ["A", "B", "C", "D"]);
    assert_eq!(report.route.total_weight, 202.0);
}

#[test]
fn negative_weight_rejected_eagerly() {
    let g = graph(&["A", "B"], vec![edge("A", "B", -0.5)]);
    assert!(matches!(
        Exploration::start(&g, Algorithm::AStar, SearchOptions::default(), "A", "B"),
        Err(SearchError::InvalidPrecondition { .. })
    ));
}
