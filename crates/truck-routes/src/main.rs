#![forbid(unsafe_code)]

use std::env;
use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use truck_routes::report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "truck-routes: tallest truck from city 1 to every other city",
    long_about = "Reads \"N M\" followed by M lines \"U V H\" (a two-way road between \
                  cities U and V with height limit H) from stdin and prints, for cities \
                  2..N, the tallest truck that can reach each one from city 1 \
                  (0 when unreachable)."
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of the plain height line.
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TRUCK_ROUTES_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "truck_routes=debug,warn"
        } else {
            "warn"
        })
    });

    let format = env::var("TRUCK_ROUTES_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

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
        .context("failed to read road list from stdin")?;

    let heights = truck_routes::solve(&text).context("invalid road list")?;
    info!(
        destinations = heights.destinations().count(),
        unreachable = heights.unreachable_count(),
        "solved"
    );

    let rendered = if cli.json {
        report::render_json(&heights)?
    } else {
        report::render_text(&heights)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}
