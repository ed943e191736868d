// ============================================================================
// Logging Setup
// Optional subscriber installation for binaries and demos
// ============================================================================

/// Install a formatted `tracing` subscriber at `level`.
///
/// Library code only emits events; call this once from a binary to see them.
///
/// # Errors
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(level: tracing::Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Another test may already have installed one; afterwards one surely is
        let _ = init_tracing(tracing::Level::DEBUG);
        assert!(init_tracing(tracing::Level::DEBUG).is_err());
    }
}
