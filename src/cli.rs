use clap::Parser;
use std::path::PathBuf;

use crate::script::ParseOptions;

/// carpark - simulate a single-lane LIFO parking garage
#[derive(Parser, Debug)]
#[command(name = "carpark")]
#[command(about = "Replay an arrival/departure script against a 10-car LIFO garage")]
#[command(version)]
pub struct Cli {
    /// Path to the command script (one `A <plate>` or `D <plate>` per line)
    pub script: PathBuf,

    /// Log discarded script lines to stderr.
    ///
    /// Lines that do not split into exactly two space-separated tokens are
    /// ignored either way; this only makes them visible.
    #[arg(long)]
    pub warn_malformed: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parser switches selected on the command line
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            warn_malformed: self.warn_malformed,
        }
    }
}
