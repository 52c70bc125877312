//! # Reporting
//!
//! The checkout flow produces human-readable progress lines ("Total: $10.00").
//! Where they go is the caller's business, so core code only ever talks to
//! the [`Reporter`] trait.
//!
//! ```text
//! OrderProcessor ──► Reporter::line ──┬──► TracingReporter  (log events)
//!                                     ├──► MemoryReporter   (tests)
//!                                     └──► app-defined      (stdout, UI)
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::info;

/// A sink for report lines.
pub trait Reporter: Send + Sync {
    /// Records one line of text.
    fn line(&self, text: &str);
}

/// Emits every line as an `info` event on the `checkout::report` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn line(&self, text: &str) {
        info!(target: "checkout::report", "{}", text);
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets every recorded line.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Reporter for MemoryReporter {
    fn line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}
