//! Importance metrics for the peer graph.
//!
//! # Overview
//!
//! Each submodule implements one metric engine over the shared immutable
//! [`Graph`](crate::graph::Graph). Every engine answers a different
//! question about node influence:
//!
//! - **Degree ranking** (`degree`): which nodes have the most incoming or
//!   outgoing edges?
//! - **PageRank** (`pagerank`): which nodes accumulate the most rank mass
//!   under the random-surfer model?
//! - **Betweenness centrality** (`betweenness`): which nodes sit on the
//!   most shortest paths between other pairs?
//! - **Clustering coefficient** (`clustering`): how tightly are a node's
//!   neighbors interconnected?
//!
//! # Usage
//!
//! All engines take `&Graph` and return an owned result with scores keyed
//! by the original node IDs. Results are built fresh on every call and
//! published whole — a compute call never leaves a previous result
//! half-updated, and engines stay usable after any failure in the caller.
//!
//! ```rust,ignore
//! use meshrank_core::graph::Graph;
//! use meshrank_core::metrics::{degree, pagerank, betweenness, clustering};
//!
//! let graph = Graph::from_edge_list("peers.txt")?;
//!
//! let deg = degree::degree_metrics(&graph);
//! let pr = pagerank::pagerank(&graph, &pagerank::PageRankConfig::default());
//! let bc = betweenness::betweenness_centrality(&graph);
//! let cc = clustering::clustering_coefficients(&graph);
//! ```
//!
//! # Parallelism
//!
//! Engines parallelize internally with `rayon`: PageRank partitions the
//! source set per iteration (reading only the previous iteration's
//! immutable rank snapshot), betweenness runs independent per-source
//! passes, clustering and degree partition per node. Partial results are
//! merged by summation, so floating-point output can differ from a serial
//! run only by summation-order rounding. A worker panic propagates and
//! aborts the whole compute call — there are no silently partial results.

pub mod betweenness;
pub mod clustering;
pub mod degree;
pub mod pagerank;

use std::collections::HashMap;

use crate::graph::{Graph, NodeId};

// ---------------------------------------------------------------------------
// Dense computation view (internal)
// ---------------------------------------------------------------------------

/// Slot-indexed view of a [`Graph`] for one computation pass.
///
/// The public model keys everything by sparse `u64` ID; the inner loops
/// want dense vectors. `DenseView` numbers nodes 0..n in ascending-ID
/// order (deterministic), rewrites the adjacency into slot space, and maps
/// slot-indexed score vectors back to ID-keyed maps when the pass is done.
pub(crate) struct DenseView {
    /// Slot → node ID, ascending.
    pub ids: Vec<NodeId>,
    /// Slot → out-neighbor slots, duplicates and file order preserved.
    pub adjacency: Vec<Vec<usize>>,
}

impl DenseView {
    pub fn new(graph: &Graph) -> Self {
        let ids = graph.sorted_ids();
        let slot_of: HashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(slot, &id)| (id, slot)).collect();

        let adjacency = ids
            .iter()
            .map(|&id| {
                graph
                    .out_neighbors(id)
                    .unwrap_or(&[])
                    .iter()
                    .map(|target| slot_of[target])
                    .collect()
            })
            .collect();

        Self { ids, adjacency }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Re-key a slot-indexed score vector by node ID.
    pub fn to_scores(&self, values: &[f64]) -> HashMap<NodeId, f64> {
        self.ids.iter().copied().zip(values.iter().copied()).collect()
    }
}

/// Merge two equal-length partial score vectors by per-slot summation.
///
/// This is the reduce step shared by the rayon fold/reduce pipelines in
/// `pagerank` and `betweenness`.
pub(crate) fn merge_partials(mut left: Vec<f64>, right: Vec<f64>) -> Vec<f64> {
    debug_assert_eq!(left.len(), right.len());
    for (acc, value) in left.iter_mut().zip(right) {
        *acc += value;
    }
    left
}
