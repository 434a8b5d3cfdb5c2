//! Prim minimum spanning tree.
//!
//! Naive node-growing variant: every pass rescans all edges incident to the
//! tree, so the cost is O(V·E). Keys live in a local table indexed by node.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph};

/// A computed spanning tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// Tree edges in the order they were committed.
    pub edges: Vec<Edge>,
    /// Sum of the tree edge weights.
    pub total_weight: i64,
}

/// Computes a minimum spanning tree rooted at node 0.
///
/// Ties go to the first strictly-minimal candidate met in node-index then
/// adjacency order. Empty and single-node graphs yield an empty tree.
///
/// # Errors
///
/// Returns `Error::Disconnected` when some node cannot be reached from node 0,
/// and `Error::WeightOverflow` when the tree's total weight exceeds `i64`.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<MstResult> {
    let total = graph.node_count();
    let mut result = MstResult::default();
    if total <= 1 {
        return Ok(result);
    }

    let mut included = vec![false; total];
    let mut key: Vec<Option<i64>> = vec![None; total];
    let mut key_edge: Vec<Option<EdgeId>> = vec![None; total];
    included[0] = true;
    key[0] = Some(0);
    let mut reached = 1;

    for _ in 1..total {
        let mut best: Option<(usize, i64)> = None;

        for u in (0..total).filter(|&u| included[u]) {
            for &id in graph.edges_of(u) {
                let Some(edge) = graph.edge(id) else { continue };
                let v = edge.other_endpoint(u);
                if included[v] {
                    continue;
                }
                if key[v].is_none_or(|k| edge.weight() < k) {
                    key[v] = Some(edge.weight());
                    key_edge[v] = Some(id);
                }
                if let Some(k) = key[v] {
                    if best.is_none_or(|(_, b)| k < b) {
                        best = Some((v, k));
                    }
                }
            }
        }

        let Some((v, weight)) = best else {
            tracing::debug!(reached, total, "Spanning tree stopped early");
            return Err(Error::Disconnected { reached, total });
        };
        included[v] = true;
        reached += 1;
        if let Some(edge) = key_edge[v].and_then(|id| graph.edge(id)) {
            result.edges.push(*edge);
        }
        result.total_weight = result
            .total_weight
            .checked_add(weight)
            .ok_or(Error::WeightOverflow)?;
    }

    tracing::debug!(
        nodes = total,
        tree_edges = result.edges.len(),
        total_weight = result.total_weight,
        "Spanning tree computed"
    );
    Ok(result)
}
