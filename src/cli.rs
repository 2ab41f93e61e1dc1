//! CLI module - Command-line interface definition and handler

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::terms::TermTable;
use crate::scan::source::Source;
use crate::scan::{runner, ScanConfig};

/// Most file paths accepted per run.
pub const MAX_FILES: usize = 64;

/// Most search terms accepted per run.
pub const MAX_TERMS: usize = 32;

/// termark - highlight every occurrence of multiple search terms.
#[derive(Parser, Debug)]
#[command(name = "termark")]
#[command(
    author,
    version,
    about,
    override_usage = "termark [options] -f <FILE>... -t <TERM>...",
    long_about = r#"termark scans each input line by line and re-emits it with every matched
term wrapped in a color marker. Each term gets its own color, cycling
through a fixed palette when there are more terms than colors.

Without -f, standard input is the sole source. Failures to open or read a
file are reported per file and never abort the rest of the run.

Examples:
    termark -f notes.txt -t cat mat
    termark -c -f access.log error.log -t timeout refused
    tail -n 100 build.log | termark -a -t warning unused
"#
)]
pub struct Cli {
    /// Files to scan; reads standard input when omitted.
    #[arg(
        short = 'f',
        value_name = "FILE",
        num_args = 1..,
        long_help = "Files to scan, in the order given. Every positional token after -f\n\
joins the file list until another option appears. When no -f is given,\n\
standard input is the sole source."
    )]
    pub files: Vec<PathBuf>,

    /// Terms to highlight; at least one is required.
    #[arg(
        short = 't',
        value_name = "TERM",
        num_args = 1..,
        required = true,
        long_help = "Literal terms to highlight, in the order given. Every positional token\n\
after -t joins the term list until another option appears. When several\n\
terms could match at the same position, the first-listed term wins."
    )]
    pub terms: Vec<String>,

    /// Case-insensitive matching (ASCII only).
    #[arg(short = 'c')]
    pub ignore_case: bool,

    /// Only keep lines that contain every term.
    #[arg(short = 'a')]
    pub match_all: bool,

    /// Scan files on worker threads (not implemented; rejected for more
    /// than one source).
    #[arg(short = 'm')]
    pub threaded: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.files.len() > MAX_FILES {
        bail!("Too many file paths specified (max = {})", MAX_FILES);
    }
    if cli.terms.len() > MAX_TERMS {
        bail!("Too many terms specified (max = {})", MAX_TERMS);
    }
    if cli.terms.iter().any(|t| t.is_empty()) {
        bail!("Search terms must not be empty");
    }

    let sources = if cli.files.is_empty() {
        vec![Source::Stdin]
    } else {
        cli.files.into_iter().map(Source::File).collect()
    };

    let config = ScanConfig {
        sources,
        terms: TermTable::new(cli.terms),
        ignore_case: cli.ignore_case,
        match_all: cli.match_all,
        threaded: cli.threaded,
    };

    runner::run(&config)
}
