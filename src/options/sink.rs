//! Destinations for the human-readable option trace.

use std::sync::{Arc, Mutex, PoisonError};

/// A write-only destination for trace lines such as `\tOption nout = 10`.
pub trait Sink: Send + std::fmt::Debug {
    fn write_line(&mut self, line: &str);

    /// Writes a warning. Defaults to an ordinary line prefixed with `WARNING: `.
    fn warn(&mut self, message: &str) {
        self.write_line(&format!("WARNING: {message}"));
    }
}

/// Forwards trace lines to `tracing` under the `optfile` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_line(&mut self, line: &str) {
        tracing::info!(target: "optfile", "{line}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "optfile", "{message}");
    }
}

/// Collects trace lines in memory.
///
/// Clones share the same buffer, so a handle kept by the caller sees every
/// line written through the copy given to [`Options`](super::Options).
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for CaptureSink {
    fn write_line(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
