//! `meshrank degree` — rank nodes by in- or out-degree.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use meshrank_core::NodeId;
use meshrank_core::metrics::degree::degree_metrics;
use meshrank_core::ranking::top_n;
use serde::Serialize;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render, write_ranked_counts};

/// Arguments for `meshrank degree`.
#[derive(Args, Debug)]
pub struct DegreeArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Number of ranked nodes to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Rank by out-degree instead of in-degree.
    #[arg(long)]
    pub out: bool,
}

#[derive(Debug, Serialize)]
struct DegreeOutput {
    node_count: usize,
    edge_count: usize,
    direction: &'static str,
    average_degree: f64,
    max_in_degree: usize,
    min_in_degree: usize,
    top: Vec<(NodeId, usize)>,
}

/// Execute `meshrank degree`.
pub fn run_degree(args: &DegreeArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.path, output)?;
    let metrics = degree_metrics(&graph);

    let (direction, ranked) = if args.out {
        ("out", top_n(&metrics.out_degree, args.top))
    } else {
        ("in", top_n(&metrics.in_degree, args.top))
    };

    let payload = DegreeOutput {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        direction,
        average_degree: graph.average_out_degree(),
        max_in_degree: metrics.max_in_degree(),
        min_in_degree: metrics.min_in_degree(),
        top: ranked,
    };

    render(output, &payload, render_degree_human)
}

fn render_degree_human(payload: &DegreeOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Graph Statistics:")?;
    writeln!(w, "- Nodes: {}", payload.node_count)?;
    writeln!(w, "- Edges: {}", payload.edge_count)?;
    writeln!(w, "- Average degree: {:.2}", payload.average_degree)?;
    writeln!(w, "- Maximum in-degree: {}", payload.max_in_degree)?;
    writeln!(w, "- Minimum in-degree: {}", payload.min_in_degree)?;
    writeln!(w)?;
    write_ranked_counts(
        w,
        &format!("Top {} nodes by {}-degree:", payload.top.len(), payload.direction),
        &payload.top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_degree_human_lists_nodes() {
        let payload = DegreeOutput {
            node_count: 4,
            edge_count: 3,
            direction: "in",
            average_degree: 0.75,
            max_in_degree: 3,
            min_in_degree: 0,
            top: vec![(4, 3), (1, 0)],
        };

        let mut buf = Vec::new();
        render_degree_human(&payload, &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("- Average degree: 0.75"));
        assert!(text.contains("Top 2 nodes by in-degree:"));
        assert!(text.contains("node 4"));
    }
}
