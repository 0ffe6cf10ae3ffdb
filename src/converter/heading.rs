//! Heading detection for `=`-delimited lines.
//!
//! The `regex` crate has no backreferences, so `^(=+)(.*?)\1$` is matched by
//! hand. The leading run backtracks the way a backtracking engine would: the
//! longest run that is repeated at the end of the span wins.

/// Highest heading level HTML supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// A heading found in a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Length of the `=` run on both ends.
    pub depth: usize,
    /// Text between the runs, untrimmed.
    pub content: &'a str,
}

impl Heading<'_> {
    /// HTML heading level, capped at h6.
    pub fn level(&self) -> usize {
        self.depth.min(MAX_HEADING_LEVEL)
    }
}

/// Matches the whole of `span` as a heading.
pub fn match_heading(span: &str) -> Option<Heading<'_>> {
    let bytes = span.as_bytes();
    let leading = bytes.iter().take_while(|&&b| b == b'=').count();
    let trailing = bytes.iter().rev().take_while(|&&b| b == b'=').count();

    (1..=leading)
        .rev()
        .find(|&depth| depth <= trailing && span.len() >= depth * 2)
        .map(|depth| Heading {
            depth,
            content: &span[depth..span.len() - depth],
        })
}
