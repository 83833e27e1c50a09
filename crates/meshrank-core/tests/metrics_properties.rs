//! Cross-engine properties over the public API.
//!
//! # Test Strategy
//!
//! 1. Pin the documented behaviors on small hand-built graphs: symmetric
//!    inputs produce symmetric outputs, sink mass leaks, degree-<2 zeros
//!    drag the global clustering mean, empty inputs never divide by zero.
//! 2. Sweep seeded random graphs and assert the invariants that must hold
//!    on any input: rank mass bounds, degree conservation, score ranges,
//!    and run-to-run stability within summation-order tolerance.
//!
//! # Epsilon
//!
//! Engines fan out with rayon and merge partial sums, so two runs may
//! differ by summation-order rounding. Assertions use `1e-9` where the
//! merge order is in play and `1e-12` where it is not.

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meshrank_core::graph::{Graph, GraphStats};
use meshrank_core::metrics::betweenness::betweenness_centrality;
use meshrank_core::metrics::clustering::clustering_coefficients;
use meshrank_core::metrics::degree::degree_metrics;
use meshrank_core::metrics::pagerank::{PageRankConfig, pagerank, pagerank_converged};
use meshrank_core::ranking::{ValueStats, top_n};

/// Rayon merge order is in play.
const MERGE_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Graph construction helpers
// ---------------------------------------------------------------------------

fn load(text: &str) -> Graph {
    Graph::from_reader(Cursor::new(text)).expect("load graph")
}

/// Seeded random edge list over `n` scattered node IDs.
///
/// IDs are spread out (`7·i + 3`) so the sparse, non-contiguous ID space
/// is exercised, not just 0..n.
fn random_edge_list(seed: u64, nodes: u64, edges: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::from("# seeded random graph\n");
    for _ in 0..edges {
        let source = rng.gen_range(0..nodes) * 7 + 3;
        let target = rng.gen_range(0..nodes) * 7 + 3;
        text.push_str(&format!("{source} {target}\n"));
    }
    text
}

// ---------------------------------------------------------------------------
// Empty and degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn comment_only_file_is_empty_everywhere() {
    let graph = load("# only comments\n\n#  and blanks\n   \n");
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);

    // No engine divides by zero against it.
    let stats = GraphStats::from_graph(&graph);
    assert!((stats.average_out_degree - 0.0).abs() < f64::EPSILON);

    assert!(pagerank(&graph, &PageRankConfig::default()).scores.is_empty());
    assert!(betweenness_centrality(&graph).scores.is_empty());
    assert!(clustering_coefficients(&graph).local.is_empty());
    assert!(degree_metrics(&graph).in_degree.is_empty());
    assert!(top_n::<f64>(&std::collections::HashMap::new(), 5).is_empty());
}

// ---------------------------------------------------------------------------
// Documented behaviors on hand-built graphs
// ---------------------------------------------------------------------------

#[test]
fn symmetric_cycle_gets_uniform_rank() {
    let graph = load("1 2\n2 3\n3 1\n");
    for damping in [0.3, 0.85, 0.95] {
        let mut config = PageRankConfig::default();
        assert!(config.set_damping(damping));
        assert!(config.set_iterations(80));
        let result = pagerank(&graph, &config);
        for node in [1, 2, 3] {
            assert!(
                (result.scores[&node] - 1.0 / 3.0).abs() < 1e-9,
                "damping {damping}, node {node}: {}",
                result.scores[&node]
            );
        }
    }
}

#[test]
fn path_graph_betweenness_normalization() {
    // 1 → 2 → 3, n = 3 → divisor (3-1)(3-2) = 2.
    let bc = betweenness_centrality(&load("1 2\n2 3\n"));
    assert!(bc.scores[&2] > 0.0);
    assert!((bc.scores[&2] - 0.5).abs() < 1e-12);
    assert!((bc.scores[&1] - 0.0).abs() < 1e-12);
    assert!((bc.scores[&3] - 0.0).abs() < 1e-12);
}

#[test]
fn full_triangle_clusters_to_one() {
    let cc = clustering_coefficients(&load("1 2\n2 1\n1 3\n3 1\n2 3\n3 2\n"));
    assert!((cc.global - 1.0).abs() < 1e-12);
}

#[test]
fn star_graph_clusters_to_zero() {
    let cc = clustering_coefficients(&load("9 1\n9 2\n9 3\n9 4\n"));
    for (node, value) in &cc.local {
        assert!((value - 0.0).abs() < 1e-12, "node {node} got {value}");
    }
    assert!((cc.global - 0.0).abs() < 1e-12);
}

#[test]
fn rank_mass_leaks_at_sinks() {
    // One round: the sink held 1/2 and redistributed none of it.
    let mut config = PageRankConfig::default();
    assert!(config.set_iterations(1));
    let result = pagerank(&load("1 2\n"), &config);

    let total: f64 = result.scores.values().sum();
    assert!(total < 1.0, "mass should leak, total = {total}");
    assert_eq!(result.sink_nodes, vec![2]);
}

#[test]
fn converged_mode_reports_iterations_used() {
    let graph = load("1 2\n2 3\n3 1\n");
    let result = pagerank_converged(&graph, &PageRankConfig::default(), 1e-8);
    assert!(result.converged);
    assert!(result.iterations >= 1);
    assert!(result.iterations < 100);
}

#[test]
fn top_n_over_population_returns_everything_ordered() {
    let graph = load("1 2\n3 2\n4 2\n4 1\n");
    let dm = degree_metrics(&graph);
    let top = top_n(&dm.in_degree, 100);
    assert_eq!(top.len(), graph.node_count());
    for pair in top.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "descending order violated: {pair:?}");
    }
}

// ---------------------------------------------------------------------------
// Invariants on seeded random graphs
// ---------------------------------------------------------------------------

#[test]
fn random_graphs_conserve_degree_totals() {
    for seed in 0..20 {
        let graph = load(&random_edge_list(seed, 40, 160));
        let dm = degree_metrics(&graph);
        let in_sum: usize = dm.in_degree.values().sum();
        let out_sum: usize = dm.out_degree.values().sum();
        assert_eq!(in_sum, graph.edge_count(), "seed {seed}");
        assert_eq!(out_sum, graph.edge_count(), "seed {seed}");
    }
}

#[test]
fn random_graphs_rank_mass_bounded() {
    for seed in 0..20 {
        let graph = load(&random_edge_list(seed, 30, 90));
        let result = pagerank(&graph, &PageRankConfig::default());
        let total: f64 = result.scores.values().sum();
        assert!(
            total <= 1.0 + MERGE_EPSILON,
            "seed {seed}: mass {total} above 1.0"
        );
        if result.sink_nodes.is_empty() {
            assert!(
                (total - 1.0).abs() < 1e-6,
                "seed {seed}: sink-free graph should conserve mass, got {total}"
            );
        }
    }
}

#[test]
fn random_graphs_repeat_within_tolerance() {
    for seed in [7, 42, 1337] {
        let graph = load(&random_edge_list(seed, 50, 200));

        let a = pagerank(&graph, &PageRankConfig::default());
        let b = pagerank(&graph, &PageRankConfig::default());
        for (node, score) in &a.scores {
            assert!(
                (score - b.scores[node]).abs() < MERGE_EPSILON,
                "seed {seed}, node {node}"
            );
        }

        let ba = betweenness_centrality(&graph);
        let bb = betweenness_centrality(&graph);
        for (node, score) in &ba.scores {
            assert!(
                (score - bb.scores[node]).abs() < MERGE_EPSILON,
                "seed {seed}, node {node}"
            );
        }
    }
}

#[test]
fn random_graphs_scores_in_range() {
    for seed in 0..10 {
        let graph = load(&random_edge_list(seed, 25, 100));

        let cc = clustering_coefficients(&graph);
        for (node, value) in &cc.local {
            assert!(
                (0.0..=1.0).contains(value),
                "seed {seed}, node {node}: {value}"
            );
        }
        assert!((0.0..=1.0).contains(&cc.global), "seed {seed}");

        let bc = betweenness_centrality(&graph);
        for (node, value) in &bc.scores {
            assert!(*value >= 0.0, "seed {seed}, node {node}: {value}");
        }

        let stats = ValueStats::from_scores(&bc.scores);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max, "seed {seed}");
    }
}
