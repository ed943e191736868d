// ============================================================================
// Diagnostic Sink Interface
// Receives the recoverable problems a formatter runs into
// ============================================================================

use std::fmt;

/// Problems reported by the number formatter.
///
/// Formatting never fails; these are emitted alongside the fallback output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A preset tag named no known preset; the output was `"-"`
    UnknownPreset { preset: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownPreset { preset } => write!(f, "Unknown format preset: {}", preset),
        }
    }
}

/// Diagnostic sink trait for processing formatter diagnostics
/// Implementations can handle logging, metrics, error reporting, etc.
pub trait DiagnosticSink: Send + Sync {
    /// Handle a diagnostic
    fn on_diagnostic(&self, diagnostic: Diagnostic);
}

/// No-op sink for testing
pub struct NoOpDiagnosticSink;

impl DiagnosticSink for NoOpDiagnosticSink {
    fn on_diagnostic(&self, _diagnostic: Diagnostic) {
        // Do nothing
    }
}

/// Logging sink
pub struct LoggingDiagnosticSink;

impl DiagnosticSink for LoggingDiagnosticSink {
    fn on_diagnostic(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnknownPreset { preset } => {
                tracing::error!(preset = %preset, "Unknown format preset");
            }
        }
    }
}
