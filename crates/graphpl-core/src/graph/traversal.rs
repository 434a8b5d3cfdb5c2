//! Generalized DFS/BFS over dense node indices.
//!
//! Both traversals work through the [`GraphTraversal`] trait and record their
//! progress in a [`TraversalContext`] supplied by the caller, so whole-graph
//! algorithms can run them repeatedly from every unvisited root while sharing
//! one visited set.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::store::Graph;

/// Read-only view the traversals walk over.
pub trait GraphTraversal {
    /// Returns the size of the node-index domain.
    fn node_count(&self) -> usize;

    /// Returns true when edges are one-way.
    fn is_directed(&self) -> bool;

    /// Returns the nodes reachable from `node` over one edge, in adjacency order.
    fn successors(&self, node: usize) -> Vec<usize>;
}

impl GraphTraversal for Graph {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn successors(&self, node: usize) -> Vec<usize> {
        if !self.is_weighted() {
            return self.neighbors_of(node).to_vec();
        }
        let directed = Graph::is_directed(self);
        self.edges_of(node)
            .iter()
            .filter_map(|&id| self.edge(id))
            .map(|edge| {
                if directed {
                    edge.end()
                } else {
                    edge.other_endpoint(node)
                }
            })
            .collect()
    }
}

/// What a depth-first walk is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Stop at the first back-edge.
    Cycle,
    /// Visit every reachable node, recording the visit order.
    Collect,
}

/// Traversal order used by whole-graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-first.
    #[default]
    Dfs,
    /// Breadth-first.
    Bfs,
}

/// Mutable traversal state spanning the whole node domain.
#[derive(Debug, Clone, Default)]
pub struct TraversalContext {
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    order: Vec<usize>,
    edges_scanned: usize,
}

impl TraversalContext {
    /// Creates fresh state for `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            on_stack: vec![false; node_count],
            order: Vec::new(),
            edges_scanned: 0,
        }
    }

    /// Returns true if `node` has been entered.
    #[must_use]
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// Returns true if `node` is on the active DFS path.
    #[must_use]
    pub fn is_on_stack(&self, node: usize) -> bool {
        self.on_stack.get(node).copied().unwrap_or(false)
    }

    /// Returns the nodes entered so far, in visit order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Drains the recorded visit order, keeping the visited set.
    pub fn take_order(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.order)
    }

    /// Returns how many adjacency entries have been examined.
    #[must_use]
    pub fn edges_scanned(&self) -> usize {
        self.edges_scanned
    }

    fn in_domain(&self, node: usize) -> bool {
        node < self.visited.len()
    }

    fn enter(&mut self, node: usize) {
        self.visited[node] = true;
        self.order.push(node);
    }
}

/// One level of the explicit DFS stack.
struct Frame {
    node: usize,
    parent: Option<usize>,
    successors: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn open<G: GraphTraversal>(graph: &G, node: usize, parent: Option<usize>) -> Self {
        Self {
            node,
            parent,
            successors: graph.successors(node),
            cursor: 0,
        }
    }
}

/// Depth-first walk from `start`.
///
/// With [`Operation::Cycle`] the walk returns true at the first back-edge:
/// a visited successor still on the active path (directed), or a visited
/// successor other than the node we came from (undirected). With
/// [`Operation::Collect`] it enters every unvisited reachable node and always
/// returns false.
///
/// `start` is skipped if it is already visited or outside the context's
/// domain. `parent` seeds the undirected parent check for `start`.
pub fn dfs<G: GraphTraversal>(
    graph: &G,
    ctx: &mut TraversalContext,
    start: usize,
    parent: Option<usize>,
    op: Operation,
) -> bool {
    if !ctx.in_domain(start) || ctx.visited[start] {
        return false;
    }

    let directed = graph.is_directed();
    let detect = op == Operation::Cycle;

    ctx.enter(start);
    ctx.on_stack[start] = true;
    let mut stack = vec![Frame::open(graph, start, parent)];

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.successors.get(frame.cursor) else {
            ctx.on_stack[frame.node] = false;
            stack.pop();
            continue;
        };
        frame.cursor += 1;
        ctx.edges_scanned += 1;

        if !ctx.in_domain(next) {
            continue;
        }

        if ctx.visited[next] {
            if detect {
                let back_edge = if directed {
                    ctx.on_stack[next]
                } else {
                    frame.parent != Some(next)
                };
                if back_edge {
                    return true;
                }
            }
            continue;
        }

        let from = frame.node;
        ctx.enter(next);
        ctx.on_stack[next] = true;
        let child_parent = detect.then_some(from);
        stack.push(Frame::open(graph, next, child_parent));
    }

    false
}

/// Breadth-first walk from `start`, entering every unvisited reachable node.
///
/// `start` is skipped if it is already visited or outside the context's domain.
pub fn bfs<G: GraphTraversal>(graph: &G, ctx: &mut TraversalContext, start: usize) {
    if !ctx.in_domain(start) || ctx.visited[start] {
        return;
    }

    let mut queue = VecDeque::new();
    ctx.enter(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.successors(current) {
            ctx.edges_scanned += 1;
            if ctx.in_domain(next) && !ctx.visited[next] {
                ctx.enter(next);
                queue.push_back(next);
            }
        }
    }
}
