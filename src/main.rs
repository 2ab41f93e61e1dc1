//! termark - highlight multiple search terms across files or stdin
//!
//! termark provides:
//! - Literal multi-term matching with a single pass per line
//! - One color tag per term, cycling through a fixed palette
//! - Per-source status reporting that never aborts the whole run

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod scan;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
