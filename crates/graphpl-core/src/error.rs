//! Error types for graphpl-core.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::Feature;

/// Engine error types.
///
/// Every variant is a reported value: nothing in the core panics or aborts the
/// surrounding process on bad input.
#[derive(Error, Debug)]
pub enum Error {
    /// An algorithm or storage primitive was invoked while a required flag is off.
    #[error("Feature not enabled: {0}")]
    FeatureDisabled(Feature),

    /// A node with this name already exists.
    #[error("Node already exists: {0}")]
    NodeExists(String),

    /// A node index outside the current node domain.
    #[error("Unknown node index: {0}")]
    UnknownNode(usize),

    /// A weighted graph received an edge without a weight.
    #[error("Weighted graph requires an edge weight")]
    MissingWeight,

    /// An unweighted graph received an edge with a weight.
    #[error("Unweighted graph does not accept edge weights")]
    UnexpectedWeight,

    /// Prim's algorithm could not reach every node from the root.
    #[error("Graph is disconnected: spanning tree reached {reached} of {total} nodes")]
    Disconnected {
        /// Nodes included in the tree when no further candidate existed.
        reached: usize,
        /// Total node count.
        total: usize,
    },

    /// The spanning tree's total weight does not fit in an `i64`.
    #[error("Spanning tree weight overflows i64")]
    WeightOverflow,

    /// A graph-file line that cannot be parsed.
    #[error("Malformed graph line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the source text.
        line: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
