//! Diagnostic sink port interface

/// Port for the process-wide diagnostic sink (console or log)
pub trait DiagnosticSink: Send + Sync {
    /// Emit a human-readable warning
    fn warn(&self, message: &str);
}
