//! Summary statistics for a loaded peer graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: as parsed from the edge list
//!   (parallel edges counted in `edge_count`).
//! - **average_out_degree**: `edge_count / node_count`, 0.0 for the empty
//!   graph.
//! - **max_in_degree** / **max_out_degree**: highest in-/out-degree over
//!   all nodes.
//! - **sink_node_count**: nodes with out-degree 0 (their PageRank mass
//!   leaks — see `metrics::pagerank`).
//! - **isolated_node_count**: nodes with no edges in either direction.
//! - **density**: `edge_count / (node_count * (node_count - 1))`, 0.0 for
//!   graphs with fewer than 2 nodes. Parallel edges can push this past
//!   1.0 on pathological inputs.
//! - **weighted**: whether any input line carried a weight token.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::build::{Graph, NodeId};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a loaded [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of distinct node IDs.
    pub node_count: usize,
    /// Number of parsed edge lines.
    pub edge_count: usize,
    /// `edge_count / node_count`; 0.0 for the empty graph.
    pub average_out_degree: f64,
    /// Highest in-degree over all nodes.
    pub max_in_degree: usize,
    /// Highest out-degree over all nodes.
    pub max_out_degree: usize,
    /// Nodes with out-degree 0.
    pub sink_node_count: usize,
    /// Nodes with neither in- nor out-edges.
    pub isolated_node_count: usize,
    /// `edge_count / (node_count * (node_count - 1))`; 0.0 below 2 nodes.
    pub density: f64,
    /// Whether the edge list carried weight tokens.
    pub weighted: bool,
    /// Fingerprint of the edge list this graph was built from.
    pub fingerprint: String,
}

impl GraphStats {
    /// Compute statistics from a loaded graph.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut in_degree: HashMap<NodeId, usize> = HashMap::new();
        let mut max_out_degree = 0_usize;

        for (_, targets) in graph.iter() {
            max_out_degree = max_out_degree.max(targets.len());
            for &target in targets {
                *in_degree.entry(target).or_insert(0) += 1;
            }
        }

        let max_in_degree = in_degree.values().copied().max().unwrap_or(0);

        let isolated_node_count = graph
            .iter()
            .filter(|&(id, targets)| targets.is_empty() && !in_degree.contains_key(&id))
            .count();

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            average_out_degree: graph.average_out_degree(),
            max_in_degree,
            max_out_degree,
            sink_node_count: graph.sink_nodes().len(),
            isolated_node_count,
            density: compute_density(graph.node_count(), graph.edge_count()),
            weighted: graph.is_weighted(),
            fingerprint: graph.fingerprint().to_string(),
        }
    }

    /// `true` if the graph has no edges at all.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn load(text: &str) -> Graph {
        Graph::from_reader(Cursor::new(text)).expect("load graph")
    }

    #[test]
    fn empty_graph_stats() {
        let stats = GraphStats::from_graph(&load(""));
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!((stats.average_out_degree - 0.0).abs() < f64::EPSILON);
        assert!((stats.density - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_in_degree, 0);
        assert_eq!(stats.max_out_degree, 0);
        assert!(stats.is_flat());
    }

    #[test]
    fn chain_stats() {
        // 1 → 2 → 3
        let stats = GraphStats::from_graph(&load("1 2\n2 3\n"));
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.max_in_degree, 1);
        assert_eq!(stats.max_out_degree, 1);
        assert_eq!(stats.sink_node_count, 1);
        assert_eq!(stats.isolated_node_count, 0);
        assert!(!stats.is_flat());
    }

    #[test]
    fn hub_degrees() {
        // 1 → {2,3,4}, 5 → 2
        let stats = GraphStats::from_graph(&load("1 2\n1 3\n1 4\n5 2\n"));
        assert_eq!(stats.max_out_degree, 3);
        assert_eq!(stats.max_in_degree, 2);
        assert_eq!(stats.sink_node_count, 3);
    }

    #[test]
    fn density_two_nodes_one_edge() {
        let stats = GraphStats::from_graph(&load("1 2\n"));
        assert!((stats.density - 0.5).abs() < 1e-10);
    }

    #[test]
    fn weighted_flag_carried() {
        let stats = GraphStats::from_graph(&load("1 2 3.5\n"));
        assert!(stats.weighted);
    }

    #[test]
    fn isolated_nodes_need_a_self_loop_free_graph() {
        // A self-loop keeps a node non-isolated; 7 7 gives node 7 both an
        // out-edge and an in-edge.
        let stats = GraphStats::from_graph(&load("7 7\n1 2\n"));
        assert_eq!(stats.isolated_node_count, 0);
    }
}
