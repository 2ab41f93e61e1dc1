//! Line scanner
//!
//! Walks a line once, left to right. At every position the terms are tested
//! in table order and the first hit wins; the matched region is emitted
//! wrapped in its term's tag and never rescanned, so a term nested inside
//! another match can not fire, while a term starting right after a match
//! can. Everything between matches is copied verbatim, which makes a line
//! without any occurrence pass through byte-identical.

use crate::core::buffer::{AllocError, OutBuf};
use crate::core::tags;
use crate::core::terms::{Term, TermTable};

/// Per-line scanner. Holds the term table, the case mode, the match-all
/// switch and a reusable seen-terms scratch.
#[derive(Debug)]
pub struct LineScanner<'a> {
    terms: &'a TermTable,
    ignore_case: bool,
    match_all: bool,
    seen: Vec<bool>,
}

impl<'a> LineScanner<'a> {
    pub fn new(terms: &'a TermTable, ignore_case: bool, match_all: bool) -> Self {
        Self {
            terms,
            ignore_case,
            match_all,
            seen: vec![false; terms.len()],
        }
    }

    /// First term (lowest index) matching `line` at `col`, if any.
    fn first_match_at(&self, line: &[u8], col: usize) -> Option<&'a Term> {
        self.terms
            .iter()
            .find(|term| term.matches_at(line, col, self.ignore_case))
    }

    /// Annotate one line into `out`.
    ///
    /// Returns whether the line was kept. In match-all mode a line missing
    /// any term is discarded by truncating `out` back to its pre-line
    /// length; otherwise every line is kept. A failed append aborts
    /// immediately and leaves `out` in its last valid (possibly truncated)
    /// state.
    pub fn scan_line(&mut self, line: &[u8], out: &mut OutBuf) -> Result<bool, AllocError> {
        let line_start = out.len();
        self.seen.fill(false);

        // offset: first byte not yet flushed; col: current scan position.
        let mut offset = 0;
        let mut col = 0;
        while col < line.len() {
            match self.first_match_at(line, col) {
                Some(term) => {
                    out.push_bytes(&line[offset..col])?;
                    let tag = tags::for_index(term.index());
                    out.push_str(tag.start)?;
                    out.push_bytes(&line[col..col + term.len()])?;
                    out.push_str(tag.end)?;
                    self.seen[term.index()] = true;
                    col += term.len();
                    offset = col;
                }
                None => col += 1,
            }
        }
        out.push_bytes(&line[offset..])?;

        if self.match_all && !self.seen.iter().all(|&s| s) {
            out.truncate(line_start);
            return Ok(false);
        }
        Ok(true)
    }
}
