//! Peer graph model for metric computation.
//!
//! # Overview
//!
//! This module owns the directed-graph representation shared by every
//! metric engine: an immutable, ID-keyed adjacency map built once from an
//! edge-list file, plus loader errors and summary statistics.
//!
//! ## Pipeline
//!
//! ```text
//! edge-list file
//!        ↓  build::Graph::from_edge_list()
//! Graph (ID-keyed adjacency, duplicates + file order preserved)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (counts, degrees, density, weighted flag, …)
//! ```
//!
//! A caller loads the graph once and hands `&Graph` to any number of
//! engines in `crate::metrics`; the graph is never mutated after load.

pub mod build;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{Graph, LoadError, NodeId};
pub use stats::GraphStats;
