// ============================================================================
// Number Formatter Factory
// Creates number formatters with validated configuration
// ============================================================================

use crate::domain::FormatterConfig;
use crate::engine::NumberFormatter;
use crate::interfaces::{DiagnosticSink, LocaleRenderer, StandardRenderer};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number formatter from configuration
///
/// # Arguments
/// * `config` - Formatter configuration
/// * `diagnostics` - Sink for unknown-preset reports
///
/// # Returns
/// * `Result<NumberFormatter, String>` - Configured formatter or error
///
/// # Example
/// ```
/// use xtm_format::prelude::*;
/// use std::sync::Arc;
///
/// let config = FormatterConfig::english();
/// let formatter = create_from_config(config, Arc::new(NoOpDiagnosticSink)).unwrap();
/// assert_eq!(formatter.format(0.125, FormatPreset::Percent), "12.5%");
/// ```
pub fn create_from_config(
    config: FormatterConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
) -> Result<NumberFormatter, String> {
    create_with_renderer(config, Box::new(StandardRenderer), diagnostics)
}

/// Creates a number formatter from configuration with a custom renderer
pub fn create_with_renderer(
    config: FormatterConfig,
    renderer: Box<dyn LocaleRenderer>,
    diagnostics: Arc<dyn DiagnosticSink>,
) -> Result<NumberFormatter, String> {
    // Validate configuration first
    config.validate()?;

    Ok(NumberFormatter::new(config, renderer, diagnostics))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating number formatters with fluent API
///
/// # Example
/// ```
/// use xtm_format::prelude::*;
/// use std::sync::Arc;
///
/// let formatter = NumberFormatterBuilder::new("de")
///     .with_long_dec_fraction_digits(3)
///     .build(Arc::new(NoOpDiagnosticSink))
///     .unwrap();
///
/// assert_eq!(formatter.format(1_234_567.0, FormatPreset::XtmLongDec), "1,235");
/// ```
pub struct NumberFormatterBuilder {
    config: FormatterConfig,
    renderer: Option<Box<dyn LocaleRenderer>>,
}

impl NumberFormatterBuilder {
    /// Create a new builder for the specified locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            config: FormatterConfig::new(locale),
            renderer: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: FormatterConfig) -> Self {
        Self {
            config,
            renderer: None,
        }
    }

    /// Set the maximum fraction digits of the `xtm-long` preset
    pub fn with_long_dec_fraction_digits(mut self, digits: u32) -> Self {
        self.config.long_dec_max_fraction_digits = digits;
        self
    }

    /// Replace the standard renderer
    pub fn with_renderer(mut self, renderer: Box<dyn LocaleRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the number formatter
    pub fn build(self, diagnostics: Arc<dyn DiagnosticSink>) -> Result<NumberFormatter, String> {
        match self.renderer {
            Some(renderer) => create_with_renderer(self.config, renderer, diagnostics),
            None => create_from_config(self.config, diagnostics),
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FormatterConfig {
        &self.config
    }
}
