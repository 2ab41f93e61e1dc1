//! Run controller
//!
//! Iterates the configured sources with one shared output buffer, resetting
//! it between sources so no output bleeds across. Per-source failures are
//! reported on stderr and the run continues; only the `-m` rejection stops
//! a run, and that happens before any scanning.

use std::io::{self, Write};

use anyhow::{bail, Result};
use colored::Colorize;

use crate::core::buffer::OutBuf;
use crate::scan::line::LineScanner;
use crate::scan::source::{scan_source, Source};
use crate::scan::ScanConfig;

/// Starting capacity for the shared output buffer. Growth doubles from
/// here, and the largest capacity reached is reused for later sources.
const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Scan every configured source in declaration order.
///
/// Returns an error only for the `-m` fail-fast; per-source failures are
/// diagnostics, not errors, so a completed run exits 0 even when some
/// sources could not be read.
pub fn run(config: &ScanConfig) -> Result<()> {
    if config.threaded && config.sources.len() > 1 {
        bail!(
            "multithreaded mode (-m) is not implemented for multiple sources; \
             run one source at a time or drop -m"
        );
    }

    let mut scanner = LineScanner::new(&config.terms, config.ignore_case, config.match_all);
    let mut out = OutBuf::with_capacity(INITIAL_BUFFER_CAPACITY);

    for source in &config.sources {
        out.clear();
        match scan_source(source, &mut scanner, &mut out) {
            Ok(()) => {
                if !out.is_empty() {
                    emit(&mut io::stdout().lock(), source, &out)?;
                }
            }
            Err(err) => {
                eprintln!("{} {}: {}", "error:".red().bold(), source.label(), err);
            }
        }
    }

    Ok(())
}

/// Write one source's header and annotated bytes.
fn emit(writer: &mut impl Write, source: &Source, out: &OutBuf) -> io::Result<()> {
    writeln!(writer, "{}", source.label().cyan().bold())?;
    writer.write_all(out.as_bytes())?;
    if !out.as_bytes().ends_with(b"\n") {
        writeln!(writer)?;
    }
    Ok(())
}
