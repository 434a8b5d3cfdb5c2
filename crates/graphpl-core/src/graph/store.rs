//! Graph store: node table, edge arena and adjacency index.
//!
//! The storage layout is fixed by the [`FeatureSet`] at construction:
//! weighted graphs keep every edge once in an arena and list its id under
//! each endpoint, unweighted graphs keep plain neighbor lists on the nodes.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::features::{Feature, FeatureSet};

use super::types::{AddNode, Edge, EdgeId, Node};

/// In-memory graph shaped by a feature set.
///
/// Node indices are dense and assigned in creation order. Names are unique.
#[derive(Debug, Clone)]
pub struct Graph {
    features: FeatureSet,
    /// Node `i` lives at position `i`.
    nodes: Vec<Node>,
    /// Edge arena addressed by [`EdgeId`] (weighted mode only).
    edges: Vec<Edge>,
    /// node index -> incident edge ids. Missing key means no edges.
    adjacency: HashMap<usize, Vec<EdgeId>>,
}

impl Graph {
    /// Creates an empty graph for the given feature set.
    #[must_use]
    pub fn new(features: FeatureSet) -> Self {
        Self {
            features,
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Returns the feature set this graph was built for.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        self.features
    }

    /// Returns true when edges carry weights (arena storage).
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.features.weighted
    }

    /// Returns true for directed edge semantics.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.features.directed
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Returns the index of the node called `name`.
    #[must_use]
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name() == name)
    }

    /// Returns the index of `name`, creating the node if needed.
    pub fn ensure_node(&mut self, name: &str) -> usize {
        self.add_node(name).index()
    }

    /// Adds a node. Idempotent: an existing name reports its index.
    pub fn add_node(&mut self, name: &str) -> AddNode {
        if let Some(idx) = self.find_node(name) {
            return AddNode::AlreadyExists(idx);
        }
        self.nodes.push(Node::new(name));
        AddNode::Added(self.nodes.len() - 1)
    }

    /// Renames a node.
    ///
    /// Returns `Ok(false)` if `old` does not exist. Renaming a node to its own
    /// name is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeExists` if another node already uses `new`.
    pub fn rename_node(&mut self, old: &str, new: &str) -> Result<bool> {
        let Some(idx) = self.find_node(old) else {
            return Ok(false);
        };
        if let Some(other) = self.find_node(new) {
            if other != idx {
                return Err(Error::NodeExists(new.to_string()));
            }
        }
        self.nodes[idx].rename(new);
        Ok(true)
    }

    /// Gets a node by index.
    #[must_use]
    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Gets a node's name by index.
    #[must_use]
    pub fn node_name(&self, idx: usize) -> Option<&str> {
        self.nodes.get(idx).map(Node::name)
    }

    /// Returns all nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Appends a weighted edge and indexes it under its endpoints.
    ///
    /// Undirected edges are listed under both endpoints, a self-loop once.
    ///
    /// # Errors
    ///
    /// - `Error::FeatureDisabled(Weighted)` on an unweighted graph
    /// - `Error::UnknownNode` if either index is out of range
    pub fn add_edge(&mut self, start: usize, end: usize, weight: i64) -> Result<EdgeId> {
        if !self.is_weighted() {
            return Err(Error::FeatureDisabled(Feature::Weighted));
        }
        self.check_index(start)?;
        self.check_index(end)?;

        let id = self.edges.len();
        self.edges.push(Edge::new(start, end, weight));
        self.adjacency.entry(start).or_default().push(id);
        if !self.is_directed() && start != end {
            self.adjacency.entry(end).or_default().push(id);
        }
        Ok(id)
    }

    /// Records `neighbor` as adjacent to `idx` (mirrored when undirected).
    ///
    /// # Errors
    ///
    /// - `Error::FeatureDisabled(Weighted)` on a weighted graph
    /// - `Error::UnknownNode` if either index is out of range
    pub fn add_neighbor(&mut self, idx: usize, neighbor: usize) -> Result<()> {
        if self.is_weighted() {
            return Err(Error::FeatureDisabled(Feature::Weighted));
        }
        self.check_index(idx)?;
        self.check_index(neighbor)?;

        self.nodes[idx].push_neighbor(neighbor);
        if !self.is_directed() && idx != neighbor {
            self.nodes[neighbor].push_neighbor(idx);
        }
        Ok(())
    }

    /// Connects two nodes by name, creating unknown names on the fly.
    ///
    /// # Errors
    ///
    /// - `Error::MissingWeight` if the graph is weighted and `weight` is `None`
    /// - `Error::UnexpectedWeight` if the graph is unweighted and a weight is given
    pub fn connect(&mut self, start: &str, end: &str, weight: Option<i64>) -> Result<()> {
        match (self.is_weighted(), weight) {
            (true, None) => return Err(Error::MissingWeight),
            (false, Some(_)) => return Err(Error::UnexpectedWeight),
            _ => {}
        }
        let s = self.ensure_node(start);
        let e = self.ensure_node(end);
        match weight {
            Some(w) => self.add_edge(s, e, w).map(|_| ()),
            None => self.add_neighbor(s, e),
        }
    }

    /// Sets the weight of every edge from `start` to `end`.
    ///
    /// Undirected edges match in either stored orientation. Unknown names and
    /// unweighted graphs update nothing. Returns the number of edges changed.
    pub fn update_edge_weight(&mut self, start: &str, end: &str, weight: i64) -> usize {
        let (Some(s), Some(e)) = (self.find_node(start), self.find_node(end)) else {
            return 0;
        };
        let Some(ids) = self.adjacency.get(&s) else {
            return 0;
        };

        let directed = self.is_directed();
        let mut updated = 0;
        for &id in ids {
            let edge = &mut self.edges[id];
            let matches = if directed {
                edge.end() == e
            } else {
                edge.other_endpoint(s) == e
            };
            if matches {
                edge.set_weight(weight);
                updated += 1;
            }
        }
        updated
    }

    /// Gets an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Returns every edge in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge ids listed under `idx` (empty when none).
    #[must_use]
    pub fn edges_of(&self, idx: usize) -> &[EdgeId] {
        self.adjacency.get(&idx).map_or(&[], Vec::as_slice)
    }

    /// Returns the neighbor list of `idx` (unweighted mode; empty when none).
    #[must_use]
    pub fn neighbors_of(&self, idx: usize) -> &[usize] {
        self.nodes.get(idx).map_or(&[], Node::neighbors)
    }

    /// Returns the number of stored edges (arena size, weighted mode).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode(idx))
        }
    }
}
