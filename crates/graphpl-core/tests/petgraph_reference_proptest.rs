//! Property-based equivalence tests against petgraph reference algorithms.
//!
//! Random graphs are built twice, once in a `GraphEngine` and once in a
//! petgraph graph with the same node order, and the results compared.

use petgraph::algo::{connected_components, is_cyclic_directed, is_cyclic_undirected, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{DiGraph, UnGraph};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

use graphpl_core::{Feature, FeatureSet, GraphEngine};

const PROP_CASES: u32 = 256;
const MAX_NODES: usize = 12;

type EdgeList = Vec<(usize, usize, i64)>;

/// Node count plus an arbitrary edge list over those nodes.
fn graph_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        let edge = (0..n, 0..n, -20_i64..50);
        (proptest::strategy::Just(n), vec(edge, 0..(n * 3)))
    })
}

/// Node count plus an edge list that is guaranteed to connect every node.
fn connected_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (2..=MAX_NODES).prop_flat_map(|n| {
        let tree = vec((0..n, -20_i64..50), n - 1);
        let extra = vec((0..n, 0..n, -20_i64..50), 0..(n * 2));
        (proptest::strategy::Just(n), tree, extra).prop_map(|(n, tree, extra)| {
            let mut edges: EdgeList = tree
                .into_iter()
                .enumerate()
                .map(|(i, (parent, w))| (i + 1, parent % (i + 1), w))
                .collect();
            edges.extend(extra);
            (n, edges)
        })
    })
}

fn name(idx: usize) -> String {
    format!("n{idx}")
}

fn engine(features: FeatureSet, n: usize, edges: &EdgeList) -> GraphEngine {
    let mut engine = GraphEngine::new(features).expect("valid features");
    for i in 0..n {
        engine.add_node(&name(i));
    }
    for &(s, e, w) in edges {
        let weight = features.weighted.then_some(w);
        engine
            .add_edge(&name(s), &name(e), weight)
            .expect("edge matches mode");
    }
    engine
}

fn undirected_reference(n: usize, edges: &EdgeList) -> UnGraph<(), i64> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    for &(s, e, w) in edges {
        graph.add_edge(nodes[s], nodes[e], w);
    }
    graph
}

fn directed_reference(n: usize, edges: &EdgeList) -> DiGraph<(), i64> {
    let mut graph = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    for &(s, e, w) in edges {
        graph.add_edge(nodes[s], nodes[e], w);
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn mst_total_matches_reference((n, edges) in connected_strategy()) {
        let features = FeatureSet::new()
            .with(Feature::Weighted)
            .with(Feature::Undirected)
            .with(Feature::Prim);
        let mst = engine(features, n, &edges).minimum_spanning_tree().expect("connected");

        let reference: i64 = min_spanning_tree(&undirected_reference(n, &edges))
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();

        prop_assert_eq!(mst.edges.len(), n - 1);
        prop_assert_eq!(mst.total_weight, reference);
    }

    #[test]
    fn component_count_matches_reference((n, edges) in graph_strategy()) {
        let features = FeatureSet::new()
            .with(Feature::Undirected)
            .with(Feature::Search)
            .with(Feature::Bfs)
            .with(Feature::Dfs)
            .with(Feature::ConnectedComponents);
        let engine = engine(features, n, &edges);
        let reference = connected_components(&undirected_reference(n, &edges));

        let dfs = engine.connected_components_with(graphpl_core::Strategy::Dfs).expect("enabled");
        let bfs = engine.connected_components_with(graphpl_core::Strategy::Bfs).expect("enabled");
        prop_assert_eq!(dfs.len(), reference);
        prop_assert_eq!(bfs.len(), reference);

        let total: usize = dfs.iter().map(|c| c.members.len()).sum();
        prop_assert_eq!(total, n);
        for (d, b) in dfs.iter().zip(&bfs) {
            let mut dm = d.members.clone();
            let mut bm = b.members.clone();
            dm.sort_unstable();
            bm.sort_unstable();
            prop_assert_eq!(dm, bm);
        }
    }

    #[test]
    fn directed_cycle_matches_reference((n, edges) in graph_strategy()) {
        let features = FeatureSet::new()
            .with(Feature::Directed)
            .with(Feature::Search)
            .with(Feature::Dfs)
            .with(Feature::CycleDetection);
        let found = engine(features, n, &edges).detect_cycle().expect("enabled");
        prop_assert_eq!(found, is_cyclic_directed(&directed_reference(n, &edges)));
    }

    #[test]
    fn undirected_cycle_matches_reference((n, edges) in graph_strategy()) {
        let features = FeatureSet::new()
            .with(Feature::Undirected)
            .with(Feature::Weighted)
            .with(Feature::Search)
            .with(Feature::Dfs)
            .with(Feature::CycleDetection);
        let found = engine(features, n, &edges).detect_cycle().expect("enabled");
        prop_assert_eq!(found, is_cyclic_undirected(&undirected_reference(n, &edges)));
    }

    #[test]
    fn adding_back_edge_to_dag_creates_cycle(n in 2..=MAX_NODES) {
        let features = FeatureSet::new()
            .with(Feature::Directed)
            .with(Feature::Search)
            .with(Feature::Dfs)
            .with(Feature::CycleDetection);
        let chain: EdgeList = (0..n - 1).map(|i| (i, i + 1, 0)).collect();
        let mut engine = engine(features, n, &chain);
        prop_assert!(!engine.detect_cycle().expect("enabled"));

        engine.add_edge(&name(n - 1), &name(0), None).expect("unweighted");
        prop_assert!(engine.detect_cycle().expect("enabled"));
    }
}
