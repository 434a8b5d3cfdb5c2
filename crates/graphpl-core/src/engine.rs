//! Feature-gated engine facade.
//!
//! [`GraphEngine`] owns the graph and its feature set, refuses operations
//! whose features are off, and returns structured results. It never prints.

use std::path::Path;

use crate::algorithms::{self, Component, MstResult};
use crate::error::{Error, Result};
use crate::features::{Feature, FeatureSet};
use crate::graph::{self, AddNode, Graph, LoadReport, Strategy};

const CYCLE_REQUIRES: [Feature; 2] = [Feature::CycleDetection, Feature::Dfs];
const COMPONENTS_REQUIRES: [Feature; 2] = [Feature::ConnectedComponents, Feature::Undirected];
const MST_REQUIRES: [Feature; 3] = [Feature::Prim, Feature::Weighted, Feature::Undirected];

/// Graph engine for one product-line configuration.
///
/// # Example
///
/// ```rust
/// use graphpl_core::{Feature, FeatureSet, GraphEngine};
///
/// let features = FeatureSet::new()
///     .with(Feature::Directed)
///     .with(Feature::Search)
///     .with(Feature::Dfs)
///     .with(Feature::CycleDetection);
/// let mut engine = GraphEngine::new(features).unwrap();
/// engine.add_edge("A", "B", None).unwrap();
/// engine.add_edge("B", "A", None).unwrap();
///
/// assert!(engine.detect_cycle().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct GraphEngine {
    features: FeatureSet,
    graph: Graph,
}

impl GraphEngine {
    /// Creates an engine with an empty graph.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the feature set fails validation.
    pub fn new(features: FeatureSet) -> Result<Self> {
        features.validate()?;
        tracing::info!(
            weighted = features.weighted,
            directed = features.directed,
            "Graph engine initialized"
        );
        Ok(Self {
            features,
            graph: Graph::new(features),
        })
    }

    /// Returns the feature set.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        self.features
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn require(&self, required: &[Feature]) -> Result<()> {
        match self.features.first_missing(required) {
            Some(feature) => {
                tracing::debug!(%feature, "Operation refused");
                Err(Error::FeatureDisabled(feature))
            }
            None => Ok(()),
        }
    }

    // ── Algorithms ─────────────────────────────────────────────────────

    /// Checks the whole graph for a cycle.
    ///
    /// Requires `cycle_detection` and `dfs`.
    pub fn detect_cycle(&self) -> Result<bool> {
        self.require(&CYCLE_REQUIRES)?;
        Ok(algorithms::has_cycle(&self.graph))
    }

    /// Lists connected components using DFS when enabled, otherwise BFS.
    ///
    /// Requires `connected_components`, `undirected`, and `bfs` or `dfs`.
    pub fn connected_components(&self) -> Result<Vec<Component>> {
        let strategy = if self.features.dfs {
            Strategy::Dfs
        } else {
            Strategy::Bfs
        };
        self.connected_components_with(strategy)
    }

    /// Lists connected components with an explicit traversal.
    ///
    /// Requires `connected_components`, `undirected`, and the chosen traversal.
    pub fn connected_components_with(&self, strategy: Strategy) -> Result<Vec<Component>> {
        self.require(&COMPONENTS_REQUIRES)?;
        let traversal = match strategy {
            Strategy::Dfs => Feature::Dfs,
            Strategy::Bfs => Feature::Bfs,
        };
        self.require(&[traversal])?;
        Ok(algorithms::connected_components(&self.graph, strategy))
    }

    /// Computes a Prim minimum spanning tree rooted at the first node.
    ///
    /// Requires `prim`, `weighted` and `undirected`.
    pub fn minimum_spanning_tree(&self) -> Result<MstResult> {
        self.require(&MST_REQUIRES)?;
        algorithms::minimum_spanning_tree(&self.graph)
    }

    // ── Mutations ──────────────────────────────────────────────────────

    /// Adds a node by name (idempotent).
    pub fn add_node(&mut self, name: &str) -> AddNode {
        self.graph.add_node(name)
    }

    /// Adds an edge between two named nodes, creating them if needed.
    ///
    /// `weight` must be `Some` on weighted graphs and `None` otherwise.
    pub fn add_edge(&mut self, start: &str, end: &str, weight: Option<i64>) -> Result<()> {
        self.graph.connect(start, end, weight)
    }

    /// Renames a node. `Ok(false)` means `old` does not exist.
    pub fn rename_node(&mut self, old: &str, new: &str) -> Result<bool> {
        self.graph.rename_node(old, new)
    }

    /// Sets the weight of every matching edge; returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns `Error::FeatureDisabled(Weighted)` on an unweighted graph.
    pub fn update_edge_weight(&mut self, start: &str, end: &str, weight: i64) -> Result<usize> {
        self.require(&[Feature::Weighted])?;
        Ok(self.graph.update_edge_weight(start, end, weight))
    }

    // ── Loading ────────────────────────────────────────────────────────

    /// Loads an edge list from text.
    pub fn load_str(&mut self, content: &str) -> LoadReport {
        graph::load_str(&mut self.graph, content)
    }

    /// Loads an edge list from a file.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadReport> {
        graph::load_file(&mut self.graph, path)
    }
}
