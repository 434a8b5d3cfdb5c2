//! Batch-mode tests for the `graphpl` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PRIM_BUILD: &str = "kWeighted 1\nkDirected 0\nkUndirected 1\nkSearch 1\nkBFS 1\nkDFS 1\nkCycle 1\nkConnectedComps 1\nkPrim 1\n";
const CYCLE_BUILD: &str = "kWeighted 0\nkDirected 1\nkUndirected 0\nkSearch 1\nkDFS 1\nkCycle 1\n";

struct Fixture {
    _dir: TempDir,
    features: PathBuf,
    graph: PathBuf,
}

fn fixture(features: &str, graph: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let features_path = dir.path().join("features.txt");
    let graph_path = dir.path().join("graph.txt");
    fs::write(&features_path, features).unwrap();
    fs::write(&graph_path, graph).unwrap();
    Fixture {
        _dir: dir,
        features: features_path,
        graph: graph_path,
    }
}

fn graphpl(fx: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("graphpl").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("GRAPHPL_CONFIG")
        .arg("--features")
        .arg(&fx.features)
        .arg("--graph")
        .arg(&fx.graph);
    cmd
}

#[test]
fn prim_prints_tree_and_total() {
    let fx = fixture(PRIM_BUILD, "A B 1\nB C 2\nA C 3\n");
    graphpl(&fx)
        .args(["-c", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MST edges:"))
        .stdout(predicate::str::contains("A-1-B"))
        .stdout(predicate::str::contains("B-2-C"))
        .stdout(predicate::str::contains("Total MST weight: 3"));
}

#[test]
fn cycle_checking_reports_cycle() {
    let fx = fixture(CYCLE_BUILD, "A B\nB C\nC A\n");
    graphpl(&fx)
        .args(["-c", "cycle checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph contains cycle!"));
}

#[test]
fn cycle_checking_after_edit() {
    let fx = fixture(CYCLE_BUILD, "A B\nB C\n");
    graphpl(&fx)
        .args(["-c", "cycle checking", "-c", "add edge C A", "-c", "cycle checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph doesn't contain cycle"))
        .stdout(predicate::str::contains("Graph contains cycle!"));
}

#[test]
fn components_listed_by_name() {
    let fx = fixture(PRIM_BUILD, "A B 1\nC D 1\n");
    graphpl(&fx)
        .args(["-c", "connected components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component 1: A B"))
        .stdout(predicate::str::contains("Component 2: C D"));
}

#[test]
fn disabled_feature_is_reported() {
    let fx = fixture(CYCLE_BUILD, "A B\n");
    graphpl(&fx)
        .args(["-c", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature not enabled!"));
}

#[test]
fn duplicate_node_is_reported() {
    let fx = fixture(CYCLE_BUILD, "A B\n");
    graphpl(&fx)
        .args(["-c", "add node A", "-c", "update node A B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node already exists!").count(2));
}

#[test]
fn unknown_command_fails() {
    let fx = fixture(CYCLE_BUILD, "A B\n");
    graphpl(&fx)
        .args(["-c", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("teleport: command not recognized."));
}

#[test]
fn update_edge_changes_mst() {
    let fx = fixture(PRIM_BUILD, "A B 5\nB C 1\nA C 1\n");
    graphpl(&fx)
        .args(["-c", "update edge B A 0", "-c", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 edge(s)"))
        .stdout(predicate::str::contains("Total MST weight: 1"));
}

#[test]
fn print_graph_unweighted() {
    let fx = fixture(CYCLE_BUILD, "A B\nA C\n");
    graphpl(&fx)
        .args(["-c", "print graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A neighbors: B C"))
        .stdout(predicate::str::contains("B neighbors: "));
}

#[test]
fn json_output_for_mst() {
    let fx = fixture(PRIM_BUILD, "A B 4\n");
    graphpl(&fx)
        .args(["--json", "-c", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_weight\": 4"))
        .stdout(predicate::str::contains("\"start\": \"A\""));
}

#[test]
fn conflicting_directions_fail_startup() {
    let fx = fixture("kDirected 1\nkUndirected 1\n", "");
    graphpl(&fx)
        .args(["-c", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("directed"));
}

#[test]
fn malformed_graph_lines_do_not_abort() {
    let fx = fixture(PRIM_BUILD, "A B 1\nbroken\nB C 2\n");
    graphpl(&fx)
        .args(["-c", "prim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total MST weight: 3"));
}

#[test]
fn oversized_mst_weight_fails_cleanly() {
    let fx = fixture(
        PRIM_BUILD,
        "A B 9223372036854775807\nB C 9223372036854775807\n",
    );
    graphpl(&fx)
        .args(["-c", "prim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows i64"))
        .stderr(predicate::str::contains("panicked").not());
}
