//! Graph construction from edge-list files.
//!
//! # Overview
//!
//! This module parses the plain-text edge-list format exchanged between
//! peers and builds the immutable directed [`Graph`] that every metric
//! engine reads. The format is line-oriented:
//!
//! ```text
//! # comment lines start with '#'
//! <source-id> <target-id> [weight]
//! ```
//!
//! - Lines starting with `#` and blank/whitespace-only lines are skipped.
//! - Remaining lines are split on whitespace; the first two tokens must be
//!   unsigned integer node IDs. A third token marks the file as weighted;
//!   the value itself is recorded nowhere and participates in no
//!   computation.
//! - Every ID that appears as an edge target is registered as a node even
//!   when it has no out-edges of its own, so engines never meet an ID that
//!   is missing from the adjacency map.
//!
//! ## Node-ID space
//!
//! Node IDs are arbitrary `u64`s — sparse, non-contiguous, not
//! zero-based. The adjacency structure is therefore a map keyed by ID,
//! not an array indexed by it. Duplicate edges are preserved in file
//! order.
//!
//! ## Fingerprint
//!
//! The graph carries a BLAKE3 hash of the edge list in file order
//! (`blake3:<hex>`). It identifies a loaded graph in logs and reports;
//! two loads of the same file produce the same fingerprint.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

/// A node identifier as it appears in an edge-list file.
pub type NodeId = u64;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while loading an edge-list file.
///
/// Both variants are fatal for the whole load: no partial graph is ever
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),

    /// A data line is malformed (missing token or non-integer node ID).
    #[error("line {line}: {reason}: '{content}'")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable directed graph over an arbitrary integer node-ID space.
///
/// Nodes are `u64` IDs. Each node maps to the ordered sequence of its
/// out-neighbors, duplicates preserved, in file order. The graph is built
/// once by [`Graph::from_edge_list`] and only ever read afterwards — every
/// engine takes `&Graph`.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Out-adjacency: node ID → ordered out-neighbor IDs.
    ///
    /// Invariant: every ID that appears anywhere as an edge target is also
    /// a key here (with an empty sequence if it has no out-edges).
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    /// Total number of parsed edge lines (parallel edges counted).
    edge_count: usize,
    /// Set when any input line carried a third token.
    weighted: bool,
    /// BLAKE3 fingerprint of the edge list (`blake3:<hex>`).
    fingerprint: String,
}

impl Graph {
    /// Load a graph from an edge-list file at `path`.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be opened or read;
    /// [`LoadError::Parse`] if any data line is missing a token or carries
    /// a non-integer node ID. Either way no graph is returned.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_edge_list(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let graph = Self::from_reader(BufReader::new(file))?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            weighted = graph.is_weighted(),
            fingerprint = %graph.fingerprint(),
            "loaded edge list"
        );
        Ok(graph)
    }

    /// Load a graph from any buffered reader of edge-list text.
    ///
    /// This is the parser behind [`Graph::from_edge_list`]; it exists so
    /// tests and remote callers can load from in-memory buffers.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_edge_list`].
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LoadError> {
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut edge_count = 0_usize;
        let mut weighted = false;
        let mut hasher = blake3::Hasher::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            let source = parse_node_id(tokens.next(), line_idx + 1, trimmed)?;
            let target = parse_node_id(tokens.next(), line_idx + 1, trimmed)?;

            // A third token means the file carries weights. The value is
            // informational only; no metric reads it.
            if tokens.next().is_some() {
                weighted = true;
            }

            adjacency.entry(source).or_default().push(target);
            adjacency.entry(target).or_default();
            edge_count += 1;

            hasher.update(&source.to_le_bytes());
            hasher.update(&target.to_le_bytes());
        }

        Ok(Self {
            adjacency,
            edge_count,
            weighted,
            fingerprint: format!("blake3:{}", hasher.finalize()),
        })
    }

    /// Number of nodes (distinct IDs seen as source or target).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges (parsed data lines, parallel edges counted).
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// `true` if any input line carried a weight token.
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// BLAKE3 fingerprint of the edge list (`blake3:<hex>`).
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Out-neighbor sequence of `node`, or `None` for an unknown ID.
    ///
    /// Duplicates and file order are preserved.
    #[must_use]
    pub fn out_neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// Out-degree of `node` (length of its adjacency sequence), or `None`
    /// for an unknown ID.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.adjacency.get(&node).map(Vec::len)
    }

    /// `true` if `node` is a key in the adjacency map.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over `(node, out-neighbors)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.adjacency.iter().map(|(&id, targets)| (id, targets.as_slice()))
    }

    /// All node IDs in ascending order.
    ///
    /// Engines use this when they need a deterministic iteration order or
    /// a dense slot numbering for a computation pass.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Nodes with out-degree 0, in ascending ID order.
    ///
    /// These are the sink nodes whose rank mass leaks during PageRank.
    #[must_use]
    pub fn sink_nodes(&self) -> Vec<NodeId> {
        let mut sinks: Vec<NodeId> = self
            .adjacency
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(&id, _)| id)
            .collect();
        sinks.sort_unstable();
        sinks
    }

    /// Average out-degree: `edge_count / node_count`.
    ///
    /// Returns 0.0 for the empty graph instead of dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_out_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        self.edge_count as f64 / self.adjacency.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Parse one node-ID token, reporting the full line on failure.
fn parse_node_id(
    token: Option<&str>,
    line: usize,
    content: &str,
) -> Result<NodeId, LoadError> {
    let token = token.ok_or_else(|| LoadError::Parse {
        line,
        content: content.to_string(),
        reason: "expected source and target node IDs".to_string(),
    })?;

    token.parse::<NodeId>().map_err(|_| LoadError::Parse {
        line,
        content: content.to_string(),
        reason: format!("invalid node ID '{token}'"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
