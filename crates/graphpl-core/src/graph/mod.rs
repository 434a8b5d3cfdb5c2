//! In-memory graph module.
//!
//! Provides the node/edge types, the feature-shaped graph store, the
//! generalized traversals and the edge-list loader.
//!
//! # Example
//!
//! ```rust
//! use graphpl_core::features::{Feature, FeatureSet};
//! use graphpl_core::graph::{Graph, GraphTraversal};
//!
//! let features = FeatureSet::new().with(Feature::Weighted).with(Feature::Undirected);
//! let mut graph = Graph::new(features);
//! graph.connect("A", "B", Some(4)).unwrap();
//!
//! let a = graph.find_node("A").unwrap();
//! assert_eq!(graph.successors(a), vec![1]);
//! ```

pub mod loader;
mod store;
pub mod traversal;
mod types;


pub use loader::{load_file, load_str, LoadReport, SkippedLine};
pub use store::Graph;
pub use traversal::{GraphTraversal, Operation, Strategy, TraversalContext};
pub use types::{AddNode, Edge, EdgeId, Node};
