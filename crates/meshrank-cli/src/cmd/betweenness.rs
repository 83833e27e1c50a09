//! `meshrank betweenness` — rank nodes by betweenness centrality.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use meshrank_core::NodeId;
use meshrank_core::metrics::betweenness::betweenness_centrality;
use meshrank_core::ranking::{ValueStats, top_n};
use serde::Serialize;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render, write_ranked_floats};

/// Arguments for `meshrank betweenness`.
#[derive(Args, Debug)]
pub struct BetweennessArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Number of ranked nodes to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Debug, Serialize)]
struct BetweennessOutput {
    node_count: usize,
    edge_count: usize,
    normalized: bool,
    average_centrality: f64,
    max_centrality: f64,
    top: Vec<(NodeId, f64)>,
}

/// Execute `meshrank betweenness`.
pub fn run_betweenness(args: &BetweennessArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.path, output)?;
    let result = betweenness_centrality(&graph);
    let stats = ValueStats::from_scores(&result.scores);

    let payload = BetweennessOutput {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        normalized: result.normalized,
        average_centrality: stats.mean,
        max_centrality: stats.max,
        top: top_n(&result.scores, args.top),
    };

    render(output, &payload, render_betweenness_human)
}

fn render_betweenness_human(payload: &BetweennessOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Graph Statistics:")?;
    writeln!(w, "- Nodes: {}", payload.node_count)?;
    writeln!(w, "- Edges: {}", payload.edge_count)?;
    writeln!(
        w,
        "- Average betweenness centrality: {:.6}",
        payload.average_centrality
    )?;
    writeln!(
        w,
        "- Maximum betweenness centrality: {:.6}",
        payload.max_centrality
    )?;
    writeln!(w, "- Normalized: {}", payload.normalized)?;
    writeln!(w)?;
    write_ranked_floats(
        w,
        &format!("Top {} nodes by betweenness:", payload.top.len()),
        &payload.top,
    )
}
