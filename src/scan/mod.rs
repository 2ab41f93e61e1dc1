//! Scanning pipeline: per-line annotation, per-source driving and the run
//! controller that ties the configured sources together.

pub mod line;
pub mod runner;
pub mod source;

use crate::core::terms::TermTable;
use crate::scan::source::Source;

/// Everything one run needs, built once from the parsed arguments and
/// passed down by reference. No ambient state.
#[derive(Debug)]
pub struct ScanConfig {
    /// Sources in declaration order; never empty (stdin is the default).
    pub sources: Vec<Source>,
    /// Terms in registration order; never empty.
    pub terms: TermTable,
    /// ASCII case-insensitive matching (`-c`).
    pub ignore_case: bool,
    /// Keep only lines containing every term (`-a`).
    pub match_all: bool,
    /// Multi-source threading requested (`-m`); see `runner::run`.
    pub threaded: bool,
}
