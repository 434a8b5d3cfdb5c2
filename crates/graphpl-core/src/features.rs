//! Feature Set: the resolved product-line configuration.
//!
//! A [`FeatureSet`] is built once (from a legacy `kName 0|1` file, a layered
//! TOML config, or directly in code), validated, and then handed to the
//! engine by value. Nothing mutates it afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A single capability flag, used to report which requirement refused a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Edge weights (edge arena storage).
    Weighted,
    /// Directed edge semantics.
    Directed,
    /// Undirected edge semantics.
    Undirected,
    /// Umbrella flag for the search traversals.
    Search,
    /// Breadth-first traversal.
    Bfs,
    /// Depth-first traversal.
    Dfs,
    /// Cycle checking.
    CycleDetection,
    /// Connected components.
    ConnectedComponents,
    /// Prim minimum spanning tree.
    Prim,
}

impl Feature {
    /// Returns the legacy config key for this feature (`kWeighted`, ...).
    #[must_use]
    pub fn legacy_key(self) -> &'static str {
        match self {
            Self::Weighted => "kWeighted",
            Self::Directed => "kDirected",
            Self::Undirected => "kUndirected",
            Self::Search => "kSearch",
            Self::Bfs => "kBFS",
            Self::Dfs => "kDFS",
            Self::CycleDetection => "kCycle",
            Self::ConnectedComponents => "kConnectedComps",
            Self::Prim => "kPrim",
        }
    }

    /// Resolves a legacy config key.
    #[must_use]
    pub fn from_legacy_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.legacy_key() == key)
    }

    /// All features, in legacy file order.
    pub const ALL: [Feature; 9] = [
        Self::Weighted,
        Self::Directed,
        Self::Undirected,
        Self::Search,
        Self::Bfs,
        Self::Dfs,
        Self::CycleDetection,
        Self::ConnectedComponents,
        Self::Prim,
    ];
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weighted => "weighted",
            Self::Directed => "directed",
            Self::Undirected => "undirected",
            Self::Search => "search",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::CycleDetection => "cycle detection",
            Self::ConnectedComponents => "connected components",
            Self::Prim => "prim",
        };
        f.write_str(name)
    }
}

/// Legacy keys the product line declares but never implemented.
pub const UNIMPLEMENTED_LEGACY_KEYS: [&str; 3] =
    ["kStronglyConnectedComps", "kKruskal", "kShortestPath"];

/// Immutable set of capability flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    /// Edges carry integer weights.
    pub weighted: bool,
    /// Edges are one-way.
    pub directed: bool,
    /// Edges are symmetric.
    pub undirected: bool,
    /// Search traversals are part of the product.
    pub search: bool,
    /// Breadth-first traversal is available.
    pub bfs: bool,
    /// Depth-first traversal is available.
    pub dfs: bool,
    /// Cycle checking is available.
    pub cycle_detection: bool,
    /// Connected-components enumeration is available.
    pub connected_components: bool,
    /// Prim MST is available.
    pub prim: bool,
}

impl FeatureSet {
    /// Creates an empty set (every flag off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `feature` switched on (builder pattern).
    #[must_use]
    pub fn with(mut self, feature: Feature) -> Self {
        self.set(feature, true);
        self
    }

    /// Returns a copy with `feature` switched off (builder pattern).
    #[must_use]
    pub fn without(mut self, feature: Feature) -> Self {
        self.set(feature, false);
        self
    }

    /// Reads a single flag.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Weighted => self.weighted,
            Feature::Directed => self.directed,
            Feature::Undirected => self.undirected,
            Feature::Search => self.search,
            Feature::Bfs => self.bfs,
            Feature::Dfs => self.dfs,
            Feature::CycleDetection => self.cycle_detection,
            Feature::ConnectedComponents => self.connected_components,
            Feature::Prim => self.prim,
        }
    }

    fn set(&mut self, feature: Feature, value: bool) {
        let slot = match feature {
            Feature::Weighted => &mut self.weighted,
            Feature::Directed => &mut self.directed,
            Feature::Undirected => &mut self.undirected,
            Feature::Search => &mut self.search,
            Feature::Bfs => &mut self.bfs,
            Feature::Dfs => &mut self.dfs,
            Feature::CycleDetection => &mut self.cycle_detection,
            Feature::ConnectedComponents => &mut self.connected_components,
            Feature::Prim => &mut self.prim,
        };
        *slot = value;
    }

    /// Returns the first flag in `required` that is off.
    #[must_use]
    pub fn first_missing(&self, required: &[Feature]) -> Option<Feature> {
        required.iter().copied().find(|f| !self.is_enabled(*f))
    }

    /// Checks the product-line constraints.
    ///
    /// `directed` and `undirected` are mutually exclusive and one of them must
    /// be chosen. Traversals enabled without `search` are accepted but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directed == self.undirected {
            return Err(ConfigError::Direction {
                directed: self.directed,
                undirected: self.undirected,
            });
        }
        if (self.bfs || self.dfs) && !self.search {
            tracing::warn!(
                bfs = self.bfs,
                dfs = self.dfs,
                "Traversal enabled without the search feature"
            );
        }
        Ok(())
    }

    /// Parses the legacy `kName value` feature file format.
    ///
    /// A flag is on iff its value starts with `1`. Blank lines and `#`
    /// comments are skipped; unknown keys are logged and ignored. The result
    /// is not validated; call [`FeatureSet::validate`] once parsing is done.
    pub fn from_legacy_str(content: &str) -> Result<Self, ConfigError> {
        let mut features = Self::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                return Err(ConfigError::Legacy {
                    line: idx + 1,
                    reason: format!("expected `<feature> <0|1>`, got `{line}`"),
                });
            };
            let enabled = value.starts_with('1');

            if let Some(feature) = Feature::from_legacy_key(key) {
                features.set(feature, enabled);
            } else if UNIMPLEMENTED_LEGACY_KEYS.contains(&key) {
                if enabled {
                    tracing::warn!(feature = key, "Feature is declared but not implemented");
                }
            } else {
                tracing::warn!(line = idx + 1, key, "Unknown feature key ignored");
            }
        }

        Ok(features)
    }

    /// Renders the set in the legacy file format.
    #[must_use]
    pub fn to_legacy_string(&self) -> String {
        Feature::ALL
            .iter()
            .map(|f| format!("{} {}\n", f.legacy_key(), u8::from(self.is_enabled(*f))))
            .collect()
    }
}
