//! Tests for layered configuration loading.

use std::io::Write;
use std::path::Path;

use figment::Jail;

use crate::config::{load_legacy_features, ConfigError, EngineConfig};
use crate::features::{Feature, FeatureSet};

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.features, FeatureSet::new());
    assert_eq!(config.graph_file, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_defaults_alone_fail_direction_check() {
    Jail::expect_with(|_jail| {
        let result = EngineConfig::load(None);
        assert!(matches!(result, Err(ConfigError::Direction { .. })));
        Ok(())
    });
}

#[test]
fn test_load_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "graphpl.toml",
            r#"
                graph_file = "graph.in"

                [features]
                weighted = true
                undirected = true
                prim = true

                [logging]
                level = "debug"
            "#,
        )?;

        let config =
            EngineConfig::load(Some(Path::new("graphpl.toml"))).map_err(|e| e.to_string())?;
        assert!(config.features.weighted);
        assert!(config.features.undirected);
        assert!(config.features.prim);
        assert!(!config.features.dfs);
        assert_eq!(config.graph_file.as_deref(), Some(Path::new("graph.in")));
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "graphpl.toml",
            r#"
                [features]
                directed = true
                dfs = false
            "#,
        )?;
        jail.set_env("GRAPHPL_FEATURES__DFS", "true");
        jail.set_env("GRAPHPL_LOGGING__LEVEL", "warn");

        let config =
            EngineConfig::load(Some(Path::new("graphpl.toml"))).map_err(|e| e.to_string())?;
        assert!(config.features.directed);
        assert!(config.features.dfs);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_env_only() {
    Jail::expect_with(|jail| {
        jail.set_env("GRAPHPL_FEATURES__UNDIRECTED", "true");
        jail.set_env("GRAPHPL_FEATURES__BFS", "true");

        let config = EngineConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(
            config.features,
            FeatureSet::new().with(Feature::Undirected).with(Feature::Bfs)
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_error() {
    Jail::expect_with(|_jail| {
        let result = EngineConfig::load(Some(Path::new("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
        Ok(())
    });
}

#[test]
fn test_invalid_toml_type_is_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("graphpl.toml", "[features]\nweighted = \"sometimes\"\n")?;
        let result = EngineConfig::load(Some(Path::new("graphpl.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn test_load_legacy_features_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "kDirected 1").unwrap();
    writeln!(file, "kSearch 1").unwrap();
    writeln!(file, "kDFS 1").unwrap();
    writeln!(file, "kCycle 1").unwrap();

    let features = load_legacy_features(file.path()).unwrap();
    assert!(features.directed);
    assert!(features.cycle_detection);
}

#[test]
fn test_load_legacy_features_rejects_both_directions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "kDirected 1").unwrap();
    writeln!(file, "kUndirected 1").unwrap();

    let result = load_legacy_features(file.path());
    assert!(matches!(result, Err(ConfigError::Direction { .. })));
}

#[test]
fn test_load_legacy_features_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_legacy_features(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_legacy_file_replaces_feature_section() {
    Jail::expect_with(|jail| {
        jail.create_file("graphpl.toml", "[features]\ndirected = true\n\n[logging]\nlevel = \"trace\"\n")?;
        jail.create_file("features.txt", "kUndirected 1\nkWeighted 1\nkPrim 1\n")?;

        let config = EngineConfig::load_with_legacy(
            Some(Path::new("graphpl.toml")),
            Some(Path::new("features.txt")),
        )
        .map_err(|e| e.to_string())?;
        assert!(!config.features.directed);
        assert!(config.features.undirected);
        assert!(config.features.prim);
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}
