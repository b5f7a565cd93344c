//! Batch drawing runner (default binary).
//!
//! Reads a command file, runs every line against a fresh session and exits.
//! Logging goes to stderr through `tracing`; `GRID_DRAW_LOG` sets the filter
//! (default `info`) and `GRID_DRAW_LOG_JSON=1` switches to JSON lines.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use grid_draw::engine::{Session, SessionConfig};

#[derive(Debug, Parser)]
#[command(name = "grid-draw", version, about = "Run a file of grid drawing commands")]
struct Cli {
    /// Command file, one `ALIAS [param ...]` per line
    input: PathBuf,
}

fn env_bool(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRID_DRAW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if env_bool("GRID_DRAW_LOG_JSON") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut session = Session::new(SessionConfig::from_env());
    let summary = session.run_file(&cli.input)?;

    info!(
        executed = summary.executed,
        skipped = summary.skipped,
        "finished {}",
        cli.input.display()
    );
    Ok(())
}
