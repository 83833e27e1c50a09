//! `meshrank pagerank` — rank nodes by PageRank.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use meshrank_core::NodeId;
use meshrank_core::metrics::pagerank::{
    PageRankConfig, PageRankResult, RankMode, pagerank, pagerank_converged,
};
use meshrank_core::ranking::top_n;
use serde::Serialize;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render, write_ranked_floats};

/// Arguments for `meshrank pagerank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Number of ranked nodes to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Damping factor in (0, 1). Invalid values are rejected with a
    /// warning and the default 0.85 is kept.
    #[arg(long)]
    pub damping: Option<f64>,

    /// Iteration count for fixed-iteration mode (default 10).
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Convergence threshold on the mean per-node delta. When set, runs
    /// in convergence mode (hard cap 100 iterations) instead of
    /// fixed-iteration mode.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RankOutput {
    node_count: usize,
    edge_count: usize,
    damping: f64,
    iterations: usize,
    converged: bool,
    mode: RankMode,
    sink_node_count: usize,
    sink_nodes: Vec<NodeId>,
    top: Vec<(NodeId, f64)>,
}

/// Execute `meshrank pagerank`.
pub fn run_pagerank(args: &RankArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.path, output)?;

    // Invalid flag values warn and fall back to the retained defaults.
    let mut config = PageRankConfig::default();
    if let Some(damping) = args.damping {
        config.set_damping(damping);
    }
    if let Some(iterations) = args.iterations {
        config.set_iterations(iterations);
    }

    let result: PageRankResult = match args.tolerance {
        Some(tolerance) => pagerank_converged(&graph, &config, tolerance),
        None => pagerank(&graph, &config),
    };

    let payload = RankOutput {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        damping: result.damping,
        iterations: result.iterations,
        converged: result.converged,
        mode: result.mode,
        sink_node_count: result.sink_nodes.len(),
        top: top_n(&result.scores, args.top),
        sink_nodes: result.sink_nodes,
    };

    render(output, &payload, render_rank_human)
}

fn render_rank_human(payload: &RankOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Graph Statistics:")?;
    writeln!(w, "- Nodes: {}", payload.node_count)?;
    writeln!(w, "- Edges: {}", payload.edge_count)?;
    writeln!(w, "- Damping factor: {:.2}", payload.damping)?;
    match payload.mode {
        RankMode::FixedIteration => {
            writeln!(w, "- Iterations: {}", payload.iterations)?;
        }
        RankMode::Converged => {
            writeln!(
                w,
                "- Iterations used: {} (converged: {})",
                payload.iterations, payload.converged
            )?;
        }
    }
    writeln!(w, "- Sink nodes: {}", payload.sink_node_count)?;
    writeln!(w)?;
    write_ranked_floats(
        w,
        &format!("Top {} nodes by PageRank:", payload.top.len()),
        &payload.top,
    )
}
