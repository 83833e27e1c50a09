//! Result ranking: bounded top-N over a node→value mapping.
//!
//! Every engine hands its scores to [`top_n`] to produce the ranked list
//! callers actually display. Ordering is descending by value with ties
//! broken by ascending node ID, so repeated runs over the same graph
//! print identically. [`ValueStats`] supplies the mean/max/min aggregates
//! the report summaries quote.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::graph::NodeId;

/// Return the top `n` `(node, value)` pairs sorted descending by value.
///
/// Ties break by ascending node ID for reproducibility. `n` larger than
/// the population simply returns everything; `n == 0` returns an empty
/// sequence. Never fails.
#[must_use]
pub fn top_n<V>(scores: &HashMap<NodeId, V>, n: usize) -> Vec<(NodeId, V)>
where
    V: PartialOrd + Copy,
{
    let mut entries: Vec<(NodeId, V)> = scores.iter().map(|(&id, &value)| (id, value)).collect();

    entries.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    entries.truncate(n);
    entries
}

/// Mean/max/min aggregates over a float-valued metric vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueStats {
    /// Arithmetic mean; 0.0 for an empty mapping.
    pub mean: f64,
    /// Largest value; 0.0 for an empty mapping.
    pub max: f64,
    /// Smallest value; 0.0 for an empty mapping.
    pub min: f64,
}

impl ValueStats {
    /// Aggregate a metric vector. The empty mapping yields all zeros
    /// rather than dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_scores(scores: &HashMap<NodeId, f64>) -> Self {
        if scores.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                min: 0.0,
            };
        }

        let mut sum = 0.0_f64;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for &value in scores.values() {
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        Self {
            mean: sum / scores.len() as f64,
            max,
            min,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
