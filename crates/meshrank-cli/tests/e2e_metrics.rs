//! End-to-end tests driving the `meshrank` binary over temp edge files.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write edges");
    file
}

fn meshrank() -> Command {
    Command::cargo_bin("meshrank").expect("binary built")
}

#[test]
fn stats_on_simple_graph() {
    let file = edge_file("# peers\n1 2\n2 3\n3 1\n");
    meshrank()
        .arg("stats")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- Nodes: 3"))
        .stdout(predicate::str::contains("- Edges: 3"));
}

#[test]
fn stats_on_comment_only_file() {
    let file = edge_file("# nothing here\n\n# still nothing\n");
    meshrank()
        .arg("stats")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- Nodes: 0"))
        .stdout(predicate::str::contains("- Average outgoing edges: 0.00"));
}

#[test]
fn pagerank_cycle_uniform_json() {
    let file = edge_file("1 2\n2 3\n3 1\n");
    let output = meshrank()
        .args(["pagerank"])
        .arg(file.path())
        .args(["--iterations", "60", "--json"])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON payload");

    assert_eq!(payload["node_count"], 3);
    let top = payload["top"].as_array().expect("top array");
    assert_eq!(top.len(), 3);
    for entry in top {
        let rank = entry[1].as_f64().expect("rank value");
        assert!((rank - 1.0 / 3.0).abs() < 1e-9, "rank {rank}");
    }
}

#[test]
fn pagerank_reports_sinks() {
    let file = edge_file("1 2\n");
    meshrank()
        .arg("pagerank")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- Sink nodes: 1"));
}

#[test]
fn betweenness_path_graph_six_decimals() {
    let file = edge_file("1 2\n2 3\n");
    meshrank()
        .arg("betweenness")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node 2"))
        .stdout(predicate::str::contains("0.500000"));
}

#[test]
fn clustering_triangle_global_one() {
    let file = edge_file("1 2\n2 1\n1 3\n3 1\n2 3\n3 2\n");
    meshrank()
        .arg("clustering")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Global clustering coefficient: 1.000000",
        ));
}

#[test]
fn degree_top_respects_limit() {
    let file = edge_file("1 4\n2 4\n3 4\n4 5\n");
    let output = meshrank()
        .arg("degree")
        .arg(file.path())
        .args(["--top", "2", "--json"])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON payload");
    let top = payload["top"].as_array().expect("top array");
    assert_eq!(top.len(), 2);
    // Node 4 has the highest in-degree.
    assert_eq!(top[0][0], 4);
    assert_eq!(top[0][1], 3);
}

#[test]
fn malformed_line_fails_whole_load() {
    let file = edge_file("1 2\nnot-a-node 3\n");
    meshrank()
        .arg("stats")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-node"));
}

#[test]
fn missing_file_fails_with_io_error() {
    meshrank()
        .args(["stats", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn invalid_damping_warns_and_uses_default() {
    // Rejected damping keeps 0.85; the command still succeeds.
    let file = edge_file("1 2\n2 1\n");
    meshrank()
        .arg("pagerank")
        .arg(file.path())
        .args(["--damping", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Damping factor: 0.85"));
}
