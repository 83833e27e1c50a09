//! `meshrank stats` — graph-level statistics for an edge-list file.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use meshrank_core::graph::GraphStats;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render};

/// Arguments for `meshrank stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,
}

/// Execute `meshrank stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.path, output)?;
    let stats = GraphStats::from_graph(&graph);
    render(output, &stats, render_stats_human)
}

fn render_stats_human(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Graph Statistics:")?;
    writeln!(w, "- Nodes: {}", stats.node_count)?;
    writeln!(w, "- Edges: {}", stats.edge_count)?;
    writeln!(w, "- Average outgoing edges: {:.2}", stats.average_out_degree)?;
    writeln!(w, "- Maximum in-degree: {}", stats.max_in_degree)?;
    writeln!(w, "- Maximum out-degree: {}", stats.max_out_degree)?;
    writeln!(w, "- Sink nodes: {}", stats.sink_node_count)?;
    writeln!(w, "- Isolated nodes: {}", stats.isolated_node_count)?;
    writeln!(w, "- Density: {:.6}", stats.density)?;
    writeln!(w, "- Is weighted graph: {}", stats.weighted)?;
    writeln!(w, "- Fingerprint: {}", stats.fingerprint)?;
    Ok(())
}
