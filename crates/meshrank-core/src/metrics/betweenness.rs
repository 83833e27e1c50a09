//! Betweenness centrality via Brandes' shortest-path accumulation.
//!
//! # Overview
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other pairs. High-betweenness peers are bridges: traffic between
//! otherwise-distant parts of the network funnels through them.
//!
//! # Algorithm
//!
//! Brandes' algorithm for directed, unweighted graphs, one pass per
//! source node `s`:
//!
//! 1. BFS from `s` along out-edges, recording distance, shortest-path
//!    count `sigma` (every edge `v→w` with `dist(w) == dist(v) + 1` adds
//!    `sigma(v)` to `sigma(w)` — *all* shortest paths are counted, not
//!    just the first found), and the predecessor set of each node.
//! 2. Pop the traversal stack (farthest nodes first — a reverse-
//!    topological order over the shortest-path DAG) and accumulate
//!    dependency: each predecessor `v` of `w` gains
//!    `(sigma(v) / sigma(w)) * (1 + dep(w))`; `w`'s own dependency then
//!    joins the running total for `w`.
//! 3. Per-source state is discarded; sources are fully independent.
//!
//! After all sources, totals are divided by `(n-1)(n-2)` when `n > 2` —
//! the directed-graph normalization, applied whether or not the input
//! happens to be symmetric. For `n ≤ 2` normalization is skipped.
//!
//! Complexity: O(n) sources × O(n + E) per source. Parallel edges in the
//! input each count as a distinct shortest path, matching the loader's
//! duplicate-preserving adjacency.
//!
//! # Parallelism
//!
//! Sources are partitioned across workers; each worker accumulates into a
//! private totals vector and the per-slot summation reduce merges them at
//! the end, so the hot loop never touches shared mutable state.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, VecDeque};

use rayon::prelude::*;
use serde::Serialize;
use tracing::instrument;

use crate::graph::{Graph, NodeId};
use crate::metrics::{DenseView, merge_partials};

/// Distance sentinel for nodes the BFS never reached.
const UNREACHED: usize = usize::MAX;

/// Result of a betweenness-centrality computation.
#[derive(Debug, Clone, Serialize)]
pub struct BetweennessResult {
    /// Centrality per node; unreached pairs contribute 0.
    pub scores: HashMap<NodeId, f64>,
    /// Whether the `(n-1)(n-2)` divisor was applied (`n > 2`).
    pub normalized: bool,
}

/// Compute betweenness centrality for every node in the graph.
///
/// Returns an empty result for the empty graph; there is no other
/// failure mode.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn betweenness_centrality(graph: &Graph) -> BetweennessResult {
    let view = DenseView::new(graph);
    let n = view.len();

    if n == 0 {
        return BetweennessResult {
            scores: HashMap::new(),
            normalized: false,
        };
    }

    let mut totals = (0..n)
        .into_par_iter()
        .fold(
            || vec![0.0_f64; n],
            |mut acc, source| {
                accumulate_from_source(&view, source, &mut acc);
                acc
            },
        )
        .reduce(|| vec![0.0_f64; n], merge_partials);

    let normalized = n > 2;
    if normalized {
        #[allow(clippy::cast_precision_loss)]
        let divisor = ((n - 1) * (n - 2)) as f64;
        for value in &mut totals {
            *value /= divisor;
        }
    }

    BetweennessResult {
        scores: view.to_scores(&totals),
        normalized,
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// One Brandes pass: BFS from `source`, then dependency accumulation in
/// reverse traversal order, added into `totals`.
#[allow(clippy::cast_precision_loss)]
fn accumulate_from_source(view: &DenseView, source: usize, totals: &mut [f64]) {
    let n = view.len();

    // Stack of reached nodes in discovery order; popping yields farthest
    // first, a valid reverse-topological order over the BFS DAG.
    let mut stack: Vec<usize> = Vec::with_capacity(n);

    // predecessors[w]: nodes immediately preceding w on shortest paths
    // from source.
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

    // sigma[t]: number of shortest paths from source to t.
    let mut sigma: Vec<u64> = vec![0; n];
    sigma[source] = 1;

    let mut dist: Vec<usize> = vec![UNREACHED; n];
    dist[source] = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        stack.push(v);

        for &w in &view.adjacency[v] {
            // First visit to w?
            if dist[w] == UNREACHED {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }

            // Shortest path to w via v? (Holds again for every parallel
            // edge, each of which counts as its own path.)
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // Dependency accumulation, farthest nodes first. Only reached nodes
    // are on the stack, so unreached nodes never contribute.
    let mut dependency: Vec<f64> = vec![0.0; n];

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            // sigma[w] > 0 for every reached node; guard anyway so a
            // malformed state cannot divide by zero.
            if sigma[w] > 0 {
                dependency[v] += (sigma[v] as f64 / sigma[w] as f64) * (1.0 + dependency[w]);
            }
        }

        if w != source {
            totals[w] += dependency[w];
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
