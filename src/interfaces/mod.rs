// ============================================================================
// Interfaces Module
// Contains the collaborator traits the number formatter is built on
// ============================================================================

mod diagnostics;
mod renderer;

pub use diagnostics::{Diagnostic, DiagnosticSink, LoggingDiagnosticSink, NoOpDiagnosticSink};
pub use renderer::{FormatLocale, LocaleRenderer, StandardRenderer};
