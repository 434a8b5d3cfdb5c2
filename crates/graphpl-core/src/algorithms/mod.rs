//! Whole-graph algorithms built on the traversal engine.
//!
//! These functions do not check the feature set; gating happens in
//! [`GraphEngine`](crate::engine::GraphEngine).

mod components;
mod cycle;
mod mst;


pub use components::{connected_components, Component};
pub use cycle::has_cycle;
pub use mst::{minimum_spanning_tree, MstResult};
