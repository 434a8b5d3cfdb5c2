//! Whole-graph cycle detection.

use crate::graph::traversal::{dfs, GraphTraversal, Operation, TraversalContext};

/// Returns true if the graph contains a cycle.
///
/// Runs a cycle-checking DFS from every unvisited node in index order and
/// stops at the first back-edge. Self-loops count as cycles, and so do
/// parallel undirected edges between the same two nodes.
pub fn has_cycle<G: GraphTraversal>(graph: &G) -> bool {
    let mut ctx = TraversalContext::new(graph.node_count());
    let found =
        (0..graph.node_count()).any(|root| dfs(graph, &mut ctx, root, None, Operation::Cycle));
    tracing::debug!(
        nodes = graph.node_count(),
        edges_scanned = ctx.edges_scanned(),
        found,
        "Cycle check finished"
    );
    found
}
