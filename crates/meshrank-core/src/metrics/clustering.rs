//! Local and global clustering coefficients.
//!
//! # Overview
//!
//! The clustering coefficient of a node measures how interconnected its
//! out-neighborhood is: 1.0 when every neighbor pair is itself connected,
//! 0.0 when none are. Tightly clustered peers sit inside cliques;
//! low-clustering hubs bridge otherwise unrelated groups.
//!
//! # Algorithm
//!
//! For node `v`, take the de-duplicated out-neighbor sequence `N(v)` in
//! first-occurrence order, `k = |N(v)|`:
//!
//! - `k < 2` → coefficient 0 (no pair to close).
//! - Otherwise every pair `(a, b)` with `a` earlier than `b` counts as a
//!   closed triangle iff `b` appears among `a`'s out-neighbors. The check
//!   is directed and never symmetrized: a pair closed only by `b → a` is
//!   **not** counted.
//! - Local coefficient = `triangles / (k·(k−1)/2)`.
//!
//! The global coefficient is the arithmetic mean of the local
//! coefficients over **all** nodes, including the zeros contributed by
//! nodes of degree < 2. That averaging convention is part of the
//! engine's contract; do not swap in the triangles-over-triplets
//! definition.
//!
//! # Cost
//!
//! Pair enumeration is O(Σ deg(v)²) in the worst case and dominates the
//! run time. Membership tests use per-node lookup sets instead of the
//! linear scans the definition implies — an output-identical
//! substitution, since the sets also collapse duplicate adjacency
//! entries and keep a repeated edge from closing the same pair twice.
//! Per-node computations are independent and partitioned across workers.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::graph::{Graph, NodeId};
use crate::metrics::DenseView;

/// Result of a clustering-coefficient computation.
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringResult {
    /// Local coefficient per node, in `[0, 1]`.
    pub local: HashMap<NodeId, f64>,
    /// Mean of all local coefficients, zeros included; 0.0 for the empty
    /// graph.
    pub global: f64,
}

/// Compute local coefficients for every node plus the global mean.
///
/// Returns an empty result for the empty graph; there is no other
/// failure mode.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn clustering_coefficients(graph: &Graph) -> ClusteringResult {
    let view = DenseView::new(graph);
    let n = view.len();

    if n == 0 {
        return ClusteringResult {
            local: HashMap::new(),
            global: 0.0,
        };
    }

    // Membership sets for the directed pair check; duplicates in the
    // adjacency collapse here.
    let neighbor_sets: Vec<HashSet<usize>> = view
        .adjacency
        .iter()
        .map(|targets| targets.iter().copied().collect())
        .collect();

    let locals: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|v| local_coefficient(&view.adjacency[v], &neighbor_sets))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let global = locals.iter().sum::<f64>() / n as f64;

    ClusteringResult {
        local: view.to_scores(&locals),
        global,
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Local coefficient of one node given its raw adjacency and the
/// membership sets of all nodes.
#[allow(clippy::cast_precision_loss)]
fn local_coefficient(targets: &[usize], neighbor_sets: &[HashSet<usize>]) -> f64 {
    // De-duplicate in first-occurrence order so a repeated edge neither
    // inflates k nor double-counts a closed pair.
    let mut neighbors: Vec<usize> = Vec::with_capacity(targets.len());
    let mut seen: HashSet<usize> = HashSet::with_capacity(targets.len());
    for &target in targets {
        if seen.insert(target) {
            neighbors.push(target);
        }
    }

    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut triangles = 0_usize;
    for i in 0..k {
        for j in (i + 1)..k {
            // Directed check, earlier → later only.
            if neighbor_sets[neighbors[i]].contains(&neighbors[j]) {
                triangles += 1;
            }
        }
    }

    triangles as f64 / (k * (k - 1) / 2) as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
