//! `meshrank clustering` — rank nodes by local clustering coefficient.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use meshrank_core::NodeId;
use meshrank_core::metrics::clustering::clustering_coefficients;
use meshrank_core::ranking::{ValueStats, top_n};
use serde::Serialize;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render, write_ranked_floats};

/// Arguments for `meshrank clustering`.
#[derive(Args, Debug)]
pub struct ClusteringArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Number of ranked nodes to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Debug, Serialize)]
struct ClusteringOutput {
    node_count: usize,
    edge_count: usize,
    global_coefficient: f64,
    max_coefficient: f64,
    min_coefficient: f64,
    top: Vec<(NodeId, f64)>,
}

/// Execute `meshrank clustering`.
pub fn run_clustering(args: &ClusteringArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.path, output)?;
    let result = clustering_coefficients(&graph);
    let stats = ValueStats::from_scores(&result.local);

    let payload = ClusteringOutput {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        global_coefficient: result.global,
        max_coefficient: stats.max,
        min_coefficient: stats.min,
        top: top_n(&result.local, args.top),
    };

    render(output, &payload, render_clustering_human)
}

fn render_clustering_human(payload: &ClusteringOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Graph Statistics:")?;
    writeln!(w, "- Nodes: {}", payload.node_count)?;
    writeln!(w, "- Edges: {}", payload.edge_count)?;
    writeln!(
        w,
        "- Global clustering coefficient: {:.6}",
        payload.global_coefficient
    )?;
    writeln!(
        w,
        "- Maximum local clustering coefficient: {:.6}",
        payload.max_coefficient
    )?;
    writeln!(
        w,
        "- Minimum local clustering coefficient: {:.6}",
        payload.min_coefficient
    )?;
    writeln!(w)?;
    write_ranked_floats(
        w,
        &format!("Top {} nodes by clustering coefficient:", payload.top.len()),
        &payload.top,
    )
}
