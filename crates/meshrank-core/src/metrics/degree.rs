//! Degree ranking: in-degree and out-degree per node.
//!
//! # Overview
//!
//! The cheapest importance signal: nodes with many incoming edges are
//! popular download targets, nodes with many outgoing edges are prolific
//! linkers. Out-degree is already known from the adjacency sequences;
//! in-degree takes one scan over every sequence, incrementing a counter
//! per target. Nodes nothing points at keep the default of 0.
//!
//! The scan is partitioned across workers per source node; partial
//! counter vectors merge by per-slot summation.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::graph::{Graph, NodeId};
use crate::metrics::DenseView;

/// Per-node degree counts for a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeMetrics {
    /// In-degree per node; 0 for nodes with no incoming edges.
    pub in_degree: HashMap<NodeId, usize>,
    /// Out-degree per node (length of the adjacency sequence).
    pub out_degree: HashMap<NodeId, usize>,
}

impl DegreeMetrics {
    /// Highest in-degree, 0 for the empty graph.
    #[must_use]
    pub fn max_in_degree(&self) -> usize {
        self.in_degree.values().copied().max().unwrap_or(0)
    }

    /// Lowest in-degree, 0 for the empty graph.
    #[must_use]
    pub fn min_in_degree(&self) -> usize {
        self.in_degree.values().copied().min().unwrap_or(0)
    }

    /// Highest out-degree, 0 for the empty graph.
    #[must_use]
    pub fn max_out_degree(&self) -> usize {
        self.out_degree.values().copied().max().unwrap_or(0)
    }
}

/// Compute in- and out-degree for every node in the graph.
///
/// Returns empty maps for the empty graph; there is no failure mode.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn degree_metrics(graph: &Graph) -> DegreeMetrics {
    if graph.is_empty() {
        return DegreeMetrics {
            in_degree: HashMap::new(),
            out_degree: HashMap::new(),
        };
    }

    let view = DenseView::new(graph);
    let n = view.len();

    let in_counts = view
        .adjacency
        .par_iter()
        .fold(
            || vec![0_usize; n],
            |mut acc, targets| {
                for &target in targets {
                    acc[target] += 1;
                }
                acc
            },
        )
        .reduce(
            || vec![0_usize; n],
            |mut left, right| {
                for (acc, value) in left.iter_mut().zip(right) {
                    *acc += value;
                }
                left
            },
        );

    let in_degree = view.ids.iter().copied().zip(in_counts).collect();
    let out_degree = view
        .ids
        .iter()
        .enumerate()
        .map(|(slot, &id)| (id, view.adjacency[slot].len()))
        .collect();

    DegreeMetrics {
        in_degree,
        out_degree,
    }
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
    fn empty_graph_empty_maps() {
        let dm = degree_metrics(&load(""));
        assert!(dm.in_degree.is_empty());
        assert!(dm.out_degree.is_empty());
        assert_eq!(dm.max_in_degree(), 0);
        assert_eq!(dm.min_in_degree(), 0);
    }

    #[test]
    fn chain_degrees() {
        // 1 → 2 → 3
        let dm = degree_metrics(&load("1 2\n2 3\n"));
        assert_eq!(dm.in_degree[&1], 0);
        assert_eq!(dm.in_degree[&2], 1);
        assert_eq!(dm.in_degree[&3], 1);
        assert_eq!(dm.out_degree[&1], 1);
        assert_eq!(dm.out_degree[&2], 1);
        assert_eq!(dm.out_degree[&3], 0);
    }

    #[test]
    fn hub_in_degree() {
        // 1 → 4, 2 → 4, 3 → 4
        let dm = degree_metrics(&load("1 4\n2 4\n3 4\n"));
        assert_eq!(dm.in_degree[&4], 3);
        assert_eq!(dm.max_in_degree(), 3);
        assert_eq!(dm.min_in_degree(), 0);
    }

    #[test]
    fn parallel_edges_count_per_occurrence() {
        let dm = degree_metrics(&load("1 2\n1 2\n"));
        assert_eq!(dm.in_degree[&2], 2);
        assert_eq!(dm.out_degree[&1], 2);
    }

    #[test]
    fn zero_in_degree_defaults_present() {
        // Every node has an in-degree entry, even pure sources.
        let dm = degree_metrics(&load("8 9\n"));
        assert_eq!(dm.in_degree.len(), 2);
        assert_eq!(dm.in_degree[&8], 0);
    }
}
