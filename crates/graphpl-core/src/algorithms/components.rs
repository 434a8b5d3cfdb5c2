//! Connected-component enumeration.

use serde::Serialize;

use crate::graph::traversal::{bfs, dfs, GraphTraversal, Operation, Strategy, TraversalContext};

/// One connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// 1-based component number, in order of the lowest member index.
    pub number: usize,
    /// Member node indices in traversal visit order.
    pub members: Vec<usize>,
}

/// Partitions the nodes into connected components.
///
/// Roots are taken in node-index order, so component numbering follows node
/// insertion order. Membership does not depend on `strategy`; only the order
/// inside each component does.
pub fn connected_components<G: GraphTraversal>(graph: &G, strategy: Strategy) -> Vec<Component> {
    let node_count = graph.node_count();
    let mut ctx = TraversalContext::new(node_count);
    let mut components = Vec::new();

    for root in 0..node_count {
        if ctx.is_visited(root) {
            continue;
        }
        match strategy {
            Strategy::Dfs => {
                dfs(graph, &mut ctx, root, None, Operation::Collect);
            }
            Strategy::Bfs => bfs(graph, &mut ctx, root),
        }
        components.push(Component {
            number: components.len() + 1,
            members: ctx.take_order(),
        });
    }

    tracing::debug!(
        nodes = node_count,
        components = components.len(),
        ?strategy,
        "Connected components computed"
    );
    components
}
