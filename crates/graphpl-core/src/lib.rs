//! # graphpl Core
//!
//! Feature-configurable in-memory graph engine.
//!
//! A [`FeatureSet`] picks the storage mode (weighted or not, directed or
//! undirected) and which algorithms exist in this build of the product line.
//! The [`GraphEngine`] refuses anything the feature set leaves out.
//!
//! ## Features
//!
//! - **Traversals**: iterative DFS and BFS over dense node indices
//! - **Cycle detection**: recursion-stack (directed) or parent tracking (undirected)
//! - **Connected components**: numbered in node-insertion order
//! - **Prim MST**: with disconnected-graph reporting
//! - **Configuration**: legacy `kName 0|1` files or TOML plus environment layering
//!
//! ## Quick Start
//!
//! ```rust
//! use graphpl_core::{Feature, FeatureSet, GraphEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let features = FeatureSet::new()
//!         .with(Feature::Weighted)
//!         .with(Feature::Undirected)
//!         .with(Feature::Prim);
//!     let mut engine = GraphEngine::new(features)?;
//!
//!     engine.load_str("A B 1\nB C 2\nA C 3\n");
//!     let mst = engine.minimum_spanning_tree()?;
//!     assert_eq!(mst.total_weight, 3);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::single_match_else,
        clippy::manual_assert
    )
)]

pub mod algorithms;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod engine;
pub mod error;
pub mod features;
pub mod graph;

pub use algorithms::{Component, MstResult};
pub use config::{load_legacy_features, ConfigError, EngineConfig, LoggingConfig};
pub use engine::GraphEngine;
pub use error::{Error, Result};
pub use features::{Feature, FeatureSet};
pub use graph::{AddNode, Edge, Graph, LoadReport, Node, Strategy};
