//! carpark - Main entry point
//!
//! Replays a command script against a fresh garage and prints the outcome of
//! every command followed by the final inventory.

use anyhow::Context;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use carpark::cli::Cli;

/// Initialize the logger.
///
/// Logs go to stderr; stdout carries only the simulation output.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    info!("carpark starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed: {:?}", cli);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    carpark::run(&cli.script, cli.parse_options(), &mut out)
        .context("Failed to write simulation output")?;
    out.flush().context("Failed to flush simulation output")?;

    Ok(())
}
