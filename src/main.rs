use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quiver::digraph::Digraph;
use quiver::metrics::{self, DirectedMetrics, UndirectedMetrics};
use quiver::net;
use quiver::report;
use quiver::ungraph::Ungraph;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compute structural metrics for a graph description file",
    long_about = None
)]
struct Cli {
    /// Path to the graph description file.
    input: PathBuf,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    name: &'a str,
    directed: &'a DirectedMetrics,
    undirected: &'a UndirectedMetrics,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("QUIVER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let records = net::parse_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let name = cli
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("graph");

    info!(
        name,
        vertices = records.vertices.len(),
        arcs = records.arcs.len(),
        "building graphs"
    );

    let directed = metrics::analyze_directed(&Digraph::from_records(&records)?);
    let undirected = metrics::analyze_undirected(&Ungraph::from_records(&records)?);

    if cli.json {
        let output = Output {
            name,
            directed: &directed,
            undirected: &undirected,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::render_directed(name, &directed));
        println!();
        print!("{}", report::render_undirected(name, &undirected));
    }

    Ok(())
}
