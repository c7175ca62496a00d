//! Console diagnostic sink adapter

use colored::*;

use crate::application::ports::DiagnosticSink;

/// Diagnostic sink writing warnings to stderr
pub struct ConsoleDiagnostics;

impl ConsoleDiagnostics {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for ConsoleDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}
