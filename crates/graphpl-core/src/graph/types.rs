//! Node and edge types for the in-memory graph.

use serde::{Deserialize, Serialize};

/// Index of an edge in the store's edge arena.
pub type EdgeId = usize;

/// A named vertex.
///
/// Identity is the dense index the store assigned at creation; the node
/// itself only carries its name and, in unweighted mode, its neighbor list.
///
/// # Example
///
/// ```rust
/// use graphpl_core::graph::Node;
///
/// let node = Node::new("A");
/// assert_eq!(node.name(), "A");
/// assert!(node.neighbors().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    neighbors: Vec<usize>,
}

impl Node {
    /// Creates a node with no neighbors.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            neighbors: Vec::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the neighbor indices (unweighted mode only; empty otherwise).
    #[must_use]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub(super) fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(super) fn push_neighbor(&mut self, neighbor: usize) {
        self.neighbors.push(neighbor);
    }
}

/// A weighted connection between two node indices.
///
/// In undirected mode `start`/`end` only record the orientation the edge was
/// inserted with; use [`Edge::other_endpoint`] to walk it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    start: usize,
    end: usize,
    weight: i64,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: usize, end: usize, weight: i64) -> Self {
        Self { start, end, weight }
    }

    /// Returns the start node index.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end node index.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the weight.
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns the endpoint opposite `node`. A self-loop returns `node`.
    #[must_use]
    pub fn other_endpoint(&self, node: usize) -> usize {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }

    /// Returns true when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    pub(super) fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }
}

/// Outcome of [`Graph::add_node`](super::Graph::add_node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "index", rename_all = "snake_case")]
pub enum AddNode {
    /// A new node was created at this index.
    Added(usize),
    /// A node with the name already existed at this index.
    AlreadyExists(usize),
}

impl AddNode {
    /// Returns the node index regardless of outcome.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Added(idx) | Self::AlreadyExists(idx) => idx,
        }
    }

    /// Returns true if a node was created.
    #[must_use]
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added(_))
    }
}
