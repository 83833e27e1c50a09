//! Command handlers for the meshrank CLI, one module per subcommand.

pub mod betweenness;
pub mod clustering;
pub mod degree;
pub mod pagerank;
pub mod stats;

use std::path::Path;

use meshrank_core::graph::Graph;

use crate::output::{CliError, OutputMode, render_error};

/// Load the edge-list file or render the failure and bail.
///
/// Loader failures (unreadable file, malformed line) are fatal for the
/// command; the error is rendered in the active output mode before the
/// non-zero exit.
pub fn load_graph(path: &Path, output: OutputMode) -> anyhow::Result<Graph> {
    match Graph::from_edge_list(path) {
        Ok(graph) => Ok(graph),
        Err(err) => {
            render_error(
                output,
                &CliError::new(format!("failed to load '{}': {err}", path.display())),
            )?;
            anyhow::bail!("graph load failed");
        }
    }
}
