//! PageRank via power iteration.
//!
//! # Overview
//!
//! PageRank models a surfer following out-edges at random: nodes that
//! accumulate rank mass are the ones many significant paths flow into.
//! High-rank peers are the influential ones worth pinning.
//!
//! # Algorithm
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! where `d` is the damping factor (default 0.85). Two modes share the
//! update rule:
//!
//! - **Fixed-iteration** ([`pagerank`]): exactly `iterations` rounds
//!   (default 10), no convergence check.
//! - **Convergence** ([`pagerank_converged`]): stop when the mean
//!   absolute per-node delta between successive rank vectors falls below
//!   a caller-supplied threshold, with a hard cap of
//!   [`CONVERGENCE_ITERATION_CAP`] rounds. The result reports the count
//!   actually used.
//!
//! # Sink nodes
//!
//! A node with out-degree 0 distributes nothing: its rank mass leaks out
//! of the system instead of being redistributed, so the total mass drops
//! below 1.0 whenever a sink holds nonzero rank. This deviates from the
//! strictly stochastic formulation and is part of the engine's contract —
//! callers that want the leak can see the sink list on the result.
//!
//! # Parallelism
//!
//! Each iteration partitions the source nodes across workers. Workers
//! read only the previous iteration's immutable rank snapshot and fold
//! contributions into private vectors; the per-slot summation reduce is
//! the barrier between iterations. Floating-point output can differ from
//! a serial run only by summation-order rounding.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::graph::{Graph, NodeId};
use crate::metrics::{DenseView, merge_partials};

/// Default damping factor.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default round count for fixed-iteration mode.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Hard iteration cap for convergence mode.
pub const CONVERGENCE_ITERATION_CAP: usize = 100;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// PageRank parameters with validated setters.
///
/// Invalid values are rejected with a warning and the previous value is
/// retained — a bad parameter never poisons the engine. Fields are
/// private so the open-interval invariant on `damping` cannot be
/// bypassed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankConfig {
    damping: f64,
    iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PageRankConfig {
    /// Configuration with default damping (0.85) and iterations (10).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current damping factor, always in the open interval `(0, 1)`.
    #[must_use]
    pub const fn damping(&self) -> f64 {
        self.damping
    }

    /// Current fixed-mode iteration count, always positive.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Set the damping factor.
    ///
    /// Values outside the open interval `(0, 1)` (including non-finite
    /// values) are rejected: a warning is logged, the previous value is
    /// kept, and `false` is returned.
    pub fn set_damping(&mut self, damping: f64) -> bool {
        if damping > 0.0 && damping < 1.0 {
            self.damping = damping;
            true
        } else {
            warn!(
                rejected = damping,
                kept = self.damping,
                "damping factor must lie in (0, 1); keeping previous value"
            );
            false
        }
    }

    /// Set the fixed-mode iteration count.
    ///
    /// Zero is rejected: a warning is logged, the previous value is kept,
    /// and `false` is returned.
    pub fn set_iterations(&mut self, iterations: usize) -> bool {
        if iterations > 0 {
            self.iterations = iterations;
            true
        } else {
            warn!(
                kept = self.iterations,
                "iteration count must be positive; keeping previous value"
            );
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which computation mode produced a [`PageRankResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankMode {
    /// Fixed number of rounds, no convergence check.
    FixedIteration,
    /// Ran until the mean per-node delta fell below a threshold (or the
    /// iteration cap).
    Converged,
}

/// Result of a PageRank computation.
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Rank per node; entries sum to ≤ 1.0 (sink mass leaks).
    pub scores: HashMap<NodeId, f64>,
    /// Rounds actually performed.
    pub iterations: usize,
    /// Whether the convergence threshold was met. Always `false` in
    /// fixed-iteration mode, where convergence is not evaluated.
    pub converged: bool,
    /// Computation mode.
    pub mode: RankMode,
    /// Damping factor used.
    pub damping: f64,
    /// Nodes with out-degree 0, ascending. Their mass leaks each round.
    pub sink_nodes: Vec<NodeId>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compute PageRank in fixed-iteration mode.
///
/// Runs exactly `config.iterations()` rounds from the uniform `1/N`
/// vector. The empty graph yields an empty result with zero iterations.
#[must_use]
#[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn pagerank(graph: &Graph, config: &PageRankConfig) -> PageRankResult {
    let view = DenseView::new(graph);
    if view.len() == 0 {
        return empty_result(RankMode::FixedIteration, config.damping());
    }

    let (ranks, iterations, _) = power_iterate(&view, config.damping(), config.iterations(), None);

    PageRankResult {
        scores: view.to_scores(&ranks),
        iterations,
        converged: false,
        mode: RankMode::FixedIteration,
        damping: config.damping(),
        sink_nodes: graph.sink_nodes(),
    }
}

/// Compute PageRank in convergence mode.
///
/// Runs until the mean absolute per-node difference between successive
/// rank vectors falls below `tolerance`, or [`CONVERGENCE_ITERATION_CAP`]
/// rounds have been performed, whichever comes first. The result reports
/// the round count actually used.
#[must_use]
#[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn pagerank_converged(graph: &Graph, config: &PageRankConfig, tolerance: f64) -> PageRankResult {
    let view = DenseView::new(graph);
    if view.len() == 0 {
        return empty_result(RankMode::Converged, config.damping());
    }

    let (ranks, iterations, converged) = power_iterate(
        &view,
        config.damping(),
        CONVERGENCE_ITERATION_CAP,
        Some(tolerance),
    );

    debug!(iterations, converged, "rank iteration finished");

    PageRankResult {
        scores: view.to_scores(&ranks),
        iterations,
        converged,
        mode: RankMode::Converged,
        damping: config.damping(),
        sink_nodes: graph.sink_nodes(),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn empty_result(mode: RankMode, damping: f64) -> PageRankResult {
    PageRankResult {
        scores: HashMap::new(),
        iterations: 0,
        converged: true,
        mode,
        damping,
        sink_nodes: Vec::new(),
    }
}

/// Run the shared power-iteration loop.
///
/// With `tolerance = None` this is fixed-iteration mode: all
/// `max_iterations` rounds run and the convergence flag stays `false`.
#[allow(clippy::cast_precision_loss)]
fn power_iterate(
    view: &DenseView,
    damping: f64,
    max_iterations: usize,
    tolerance: Option<f64>,
) -> (Vec<f64>, usize, bool) {
    let n = view.len();
    let n_f64 = n as f64;
    let base = (1.0 - damping) / n_f64;

    let mut ranks = vec![1.0 / n_f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        iterations += 1;

        let next = rank_round(view, &ranks, damping, base);

        let mean_delta: f64 = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum::<f64>()
            / n_f64;

        ranks = next;

        if let Some(tol) = tolerance {
            if mean_delta < tol {
                converged = true;
                break;
            }
        }
    }

    (ranks, iterations, converged)
}

/// One rank round: distribute the previous snapshot along out-edges.
///
/// Sources are partitioned across workers; each worker folds into a
/// private contribution vector and the reduce merges per slot. Sink
/// nodes distribute nothing — their mass leaks.
#[allow(clippy::cast_precision_loss)]
fn rank_round(view: &DenseView, ranks: &[f64], damping: f64, base: f64) -> Vec<f64> {
    let n = view.len();

    let contributions = (0..n)
        .into_par_iter()
        .fold(
            || vec![0.0_f64; n],
            |mut acc, source| {
                let targets = &view.adjacency[source];
                if !targets.is_empty() {
                    let share = damping * ranks[source] / targets.len() as f64;
                    for &target in targets {
                        acc[target] += share;
                    }
                }
                acc
            },
        )
        .reduce(|| vec![0.0_f64; n], merge_partials);

    contributions.into_iter().map(|c| base + c).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
