#![forbid(unsafe_code)]
//! meshrank-core: structural importance metrics over directed peer graphs.
//!
//! Peers in a file-sharing network exchange plain edge-list files
//! describing who links to whom; this crate loads such a file once into
//! an immutable [`graph::Graph`] and computes importance metrics against
//! it: degree ranking, PageRank, betweenness centrality, and clustering
//! coefficients. [`ranking::top_n`] turns any metric vector into the
//! bounded, deterministic leaderboard callers display.
//!
//! ```rust,ignore
//! use meshrank_core::graph::Graph;
//! use meshrank_core::metrics::pagerank::{PageRankConfig, pagerank};
//! use meshrank_core::ranking::top_n;
//!
//! let graph = Graph::from_edge_list("peers.txt")?;
//! let result = pagerank(&graph, &PageRankConfig::default());
//! for (node, rank) in top_n(&result.scores, 10) {
//!     println!("{node} {rank:.6}");
//! }
//! ```
//!
//! # Conventions
//!
//! - **Errors**: the loader returns a typed [`graph::LoadError`]; engines
//!   are pure functions over `&Graph` with no failure modes beyond the
//!   guarded empty-graph cases. Invalid engine parameters are rejected
//!   with a warning and the previous value retained.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`);
//!   compute entry points are `#[instrument]`ed.
//! - **Parallelism**: engines fan out internally with `rayon`; results
//!   are deterministic up to floating-point summation order.

pub mod graph;
pub mod metrics;
pub mod ranking;

pub use graph::{Graph, GraphStats, LoadError, NodeId};
