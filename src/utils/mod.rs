// ============================================================================
// Utilities Module
// Helpers for binaries embedding the formatter
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
