use std::io::{self, BufRead};

use super::text::normalize_line;

/// Reads normalized lines from an options stream.
///
/// Each call to [`next_line`](Self::next_line) consumes exactly one raw line
/// and returns it with comments removed, whitespace trimmed and unquoted text
/// lower-cased. Blank and comment-only lines come back as empty strings.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Returns the next normalized line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(normalize_line(&self.buf)))
    }

    /// One-based number of the line most recently returned.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
