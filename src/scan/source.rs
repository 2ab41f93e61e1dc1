//! Source driver
//!
//! Binds one source (a named file or standard input), reads it line by line
//! and feeds each line to the scanner. Every source resolves to exactly one
//! outcome: success, an open/read failure, or an allocation failure. A
//! failure never escalates beyond the source — the run controller decides
//! what to do with it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

use crate::core::buffer::{AllocError, OutBuf};
use crate::scan::line::LineScanner;

/// Label used for standard input in headers and diagnostics.
pub const STDIN_LABEL: &str = "(standard input)";

/// One input to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process's standard input.
    Stdin,
    /// A named file.
    File(PathBuf),
}

impl Source {
    /// Human-readable name for headers and diagnostics.
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => STDIN_LABEL.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Why a source failed to scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source could not be opened or read.
    #[error("cannot read: {0}")]
    Io(#[from] io::Error),
    /// The output buffer could not grow.
    #[error("out of memory: {0}")]
    Alloc(#[from] AllocError),
}

/// Scan one source to completion, appending annotated lines to `out`.
///
/// Open failures are returned before a single byte is read. The file
/// handle is dropped when this function returns; standard input is locked
/// for the duration and never closed.
pub fn scan_source(
    source: &Source,
    scanner: &mut LineScanner<'_>,
    out: &mut OutBuf,
) -> Result<(), ScanError> {
    match source {
        Source::Stdin => scan_reader(io::stdin().lock(), scanner, out),
        Source::File(path) => {
            let file = File::open(path)?;
            scan_reader(BufReader::new(file), scanner, out)
        }
    }
}

/// Read lines (including their `\n`) until end-of-stream, scanning each.
/// The line vector is reused across iterations.
fn scan_reader<R: BufRead>(
    mut reader: R,
    scanner: &mut LineScanner<'_>,
    out: &mut OutBuf,
) -> Result<(), ScanError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Ok(());
        }
        scanner.scan_line(&line, out)?;
    }
}
