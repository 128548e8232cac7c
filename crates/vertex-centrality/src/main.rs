#![forbid(unsafe_code)]

use std::env;
use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vertex_centrality::{LinkGraph, closeness, parse_links, report};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "vertex-centrality: most central vertex of a weighted directed graph",
    long_about = "Reads \"N M\" followed by M lines \"U V W\" (a directed edge from U to V \
                  with weight W, vertices 0..N-1) from stdin and prints the vertex with \
                  the largest closeness centrality, the sum of (N-1)/d(u,v) over every \
                  vertex u that can reach v."
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output (winner plus every vertex's score).
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("VERTEX_CENTRALITY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "vertex_centrality=debug,warn"
        } else {
            "warn"
        })
    });

    let format =
        env::var("VERTEX_CENTRALITY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read edge list from stdin")?;

    let links = parse_links(&text).context("invalid edge list")?;
    let graph = LinkGraph::from_links(&links);
    let scores = closeness::closeness_scores(&graph);
    let winner = closeness::pick_leader(&scores);
    info!(vertex = winner.vertex, score = winner.score, "solved");

    let rendered = if cli.json {
        report::render_json(&winner, &scores)?
    } else {
        report::render_text(&winner)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}
