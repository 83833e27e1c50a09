#![forbid(unsafe_code)]
//! meshrank: importance metrics over peer graphs from edge-list files.

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "meshrank: structural importance metrics for peer graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Show graph-level statistics",
        after_help = "EXAMPLES:\n    # Summarize an edge list\n    meshrank stats peers.txt\n\n    # Machine-readable output\n    meshrank stats peers.txt --json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Rank nodes by in- or out-degree",
        after_help = "EXAMPLES:\n    # Top 10 by in-degree\n    meshrank degree peers.txt\n\n    # Top 5 by out-degree\n    meshrank degree peers.txt --out --top 5"
    )]
    Degree(cmd::degree::DegreeArgs),

    #[command(
        about = "Rank nodes by PageRank",
        after_help = "EXAMPLES:\n    # Fixed-iteration mode (10 rounds)\n    meshrank pagerank peers.txt\n\n    # Convergence mode with threshold\n    meshrank pagerank peers.txt --tolerance 1e-8\n\n    # Custom damping\n    meshrank pagerank peers.txt --damping 0.5 --iterations 30"
    )]
    Pagerank(cmd::pagerank::RankArgs),

    #[command(
        about = "Rank nodes by betweenness centrality",
        after_help = "EXAMPLES:\n    # Top bridges in the graph\n    meshrank betweenness peers.txt --top 20"
    )]
    Betweenness(cmd::betweenness::BetweennessArgs),

    #[command(
        about = "Rank nodes by local clustering coefficient",
        after_help = "EXAMPLES:\n    # Most clustered neighborhoods\n    meshrank clustering peers.txt"
    )]
    Clustering(cmd::clustering::ClusteringArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MESHRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "meshrank=debug,info"
        } else {
            "meshrank=info,warn"
        })
    });

    let format = env::var("MESHRANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = OutputMode::from_flag(cli.json);

    match cli.command {
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output),
        Commands::Degree(ref args) => cmd::degree::run_degree(args, output),
        Commands::Pagerank(ref args) => cmd::pagerank::run_pagerank(args, output),
        Commands::Betweenness(ref args) => cmd::betweenness::run_betweenness(args, output),
        Commands::Clustering(ref args) => cmd::clustering::run_clustering(args, output),
    }
}
