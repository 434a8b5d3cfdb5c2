//! Layered engine configuration.
//!
//! Precedence, lowest to highest: built-in defaults, a TOML file, then
//! `GRAPHPL_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `GRAPHPL_FEATURES__PRIM=true`).
//!
//! ```toml
//! graph_file = "graph.in"
//!
//! [features]
//! weighted = true
//! undirected = true
//! search = true
//! dfs = true
//! prim = true
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::FeatureSet;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GRAPHPL_";

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Extraction from the layered providers failed.
    #[error("Failed to load configuration: {0}")]
    Figment(#[source] Box<figment::Error>),

    /// A line of a legacy feature file could not be parsed.
    #[error("Invalid feature file line {line}: {reason}")]
    Legacy {
        /// 1-based line number.
        line: usize,
        /// Human-readable cause.
        reason: String,
    },

    /// Directed and undirected are both on, or both off.
    #[error(
        "Exactly one of directed/undirected must be enabled \
         (directed={directed}, undirected={undirected})"
    )]
    Direction {
        /// Value of the directed flag.
        directed: bool,
        /// Value of the undirected flag.
        undirected: bool,
    },

    /// A configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive (overridden by `RUST_LOG`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The product-line feature selection.
    pub features: FeatureSet,
    /// Optional edge-list file loaded at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_file: Option<PathBuf>,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Builds the provider stack: defaults, optional TOML file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// An explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_legacy(path, None)
    }

    /// Loads the configuration, replacing its feature section with a legacy
    /// feature file when one is given, then validates the result.
    pub fn load_with_legacy(path: Option<&Path>, legacy: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                });
            }
        }
        let mut config: Self = Self::figment(path).extract()?;
        if let Some(legacy) = legacy {
            config.features = read_legacy_features(legacy)?;
        }
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.features.validate()?;
        tracing::debug!(features = ?self.features, "Configuration loaded");
        Ok(self)
    }
}

/// Reads and validates a legacy `kName 0|1` feature file.
pub fn load_legacy_features(path: &Path) -> Result<FeatureSet, ConfigError> {
    let features = read_legacy_features(path)?;
    features.validate()?;
    Ok(features)
}

fn read_legacy_features(path: &Path) -> Result<FeatureSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FeatureSet::from_legacy_str(&content)
}
