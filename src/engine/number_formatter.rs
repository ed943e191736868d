// ============================================================================
// Number Formatter
// Preset dispatch: truncating transform first, locale rendering second
// ============================================================================

use crate::domain::{FormatPreset, FormatterConfig, RenderOptions};
use crate::interfaces::{
    Diagnostic, DiagnosticSink, FormatLocale, LocaleRenderer, LoggingDiagnosticSink,
    StandardRenderer,
};
use crate::numeric::{
    remove_xtm_crypto_decimals, round_compact_decimals, round_to_two_decimals, XtmAmount,
    DEFAULT_DECIMALS,
};
use std::fmt;
use std::sync::Arc;

/// Below this the `compact` preset writes the number out in full
const COMPACT_THRESHOLD: f64 = 10_000.0;

/// Whole XTM below which `xtm-compact` only says "less than a cent"
const XTM_DUST_LIMIT: f64 = 0.01;

/// Output of `xtm-compact` for positive amounts below [`XTM_DUST_LIMIT`]
pub const XTM_DUST_LABEL: &str = "< 0.01";

/// Output for a preset tag that names no preset
pub const UNKNOWN_PRESET_LABEL: &str = "-";

/// Apply an integer rounding helper to a float carrying a fixed-point value.
///
/// Fractional raw units are truncated toward zero first; the helpers only
/// ever remove digits at or above the first raw unit, so the result is the
/// same. Non-finite values pass through for the renderer to spell out.
fn truncate_with(value: f64, round: fn(i64, u32) -> i64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    round(value as i64, DEFAULT_DECIMALS) as f64
}

/// Locale-aware number formatter with named presets.
///
/// Immutable after construction and safe to share between threads.
///
/// # Example
/// ```
/// use xtm_format::prelude::*;
///
/// let formatter = NumberFormatter::for_locale(FormatLocale::english());
/// assert_eq!(formatter.format(1_999_999.0, FormatPreset::XtmLong), "1.99");
/// assert_eq!(formatter.format(12_345_678_987_654.0, FormatPreset::XtmCompact), "12.34M");
/// ```
pub struct NumberFormatter {
    /// Locale every call renders in
    locale: FormatLocale,

    /// Settings the formatter was built from
    config: FormatterConfig,

    /// Pluggable locale renderer
    renderer: Box<dyn LocaleRenderer>,

    /// Receiver of unknown-preset reports
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl NumberFormatter {
    /// Create a new number formatter
    pub fn new(
        config: FormatterConfig,
        renderer: Box<dyn LocaleRenderer>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let locale = FormatLocale::new(&config.locale);
        tracing::debug!(
            locale = locale.name(),
            renderer = renderer.name(),
            "Number formatter created"
        );

        Self {
            locale,
            config,
            renderer,
            diagnostics,
        }
    }

    /// Standard renderer, logged diagnostics, default settings for `locale`
    pub fn for_locale(locale: FormatLocale) -> Self {
        Self {
            locale,
            config: FormatterConfig::new(locale.name()),
            renderer: Box::new(StandardRenderer),
            diagnostics: Arc::new(LoggingDiagnosticSink),
        }
    }

    pub fn locale(&self) -> &FormatLocale {
        &self.locale
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    // ========================================================================
    // Preset Dispatch
    // ========================================================================

    /// Format `value` with a preset.
    ///
    /// XTM presets read `value` as micro-units (10^-6 XTM).
    pub fn format(&self, value: f64, preset: FormatPreset) -> String {
        match preset {
            FormatPreset::Compact => self.format_compact(value),
            FormatPreset::Percent => self.format_percent(Some(value)),
            FormatPreset::XtmCompact => self.format_xtm_compact(value),
            FormatPreset::XtmLong => self.format_xtm_long(value),
            FormatPreset::XtmLongDec => {
                self.format_xtm_long_dec(value, self.config.long_dec_max_fraction_digits)
            }
            FormatPreset::XtmDecimals => self.format_xtm_decimals(value),
            FormatPreset::DecimalCompact => self.format_decimal_compact(value),
        }
    }

    /// Format `value` with a preset named by its wire tag.
    ///
    /// An unknown tag reports [`Diagnostic::UnknownPreset`] once and yields
    /// `"-"`.
    pub fn format_tag(&self, value: f64, tag: &str) -> String {
        match tag.parse::<FormatPreset>() {
            Ok(preset) => self.format(value, preset),
            Err(err) => {
                self.diagnostics.on_diagnostic(Diagnostic::UnknownPreset {
                    preset: err.tag().to_string(),
                });
                UNKNOWN_PRESET_LABEL.to_string()
            }
        }
    }

    /// Format a typed amount with a preset.
    ///
    /// XTM presets see the raw micro-units; the others see the whole-unit value.
    pub fn format_amount(&self, amount: XtmAmount, preset: FormatPreset) -> String {
        if preset.is_xtm() {
            self.format(amount.raw_value() as f64, preset)
        } else {
            self.format(amount.to_f64(), preset)
        }
    }

    // ========================================================================
    // Individual Presets
    // ========================================================================

    /// Render `value` as-is with explicit options.
    pub fn format_value(&self, value: f64, options: &RenderOptions) -> String {
        self.renderer.render(value, options, &self.locale)
    }

    /// Percentage with up to 2 fraction digits; a missing value reads as 0.
    pub fn format_percent(&self, value: Option<f64>) -> String {
        self.format_value(
            value.unwrap_or(0.0),
            &RenderOptions::percent().with_max_fraction_digits(2),
        )
    }

    /// Plain number with up to 2 fraction digits.
    pub fn format_decimal_compact(&self, value: f64) -> String {
        self.format_value(value, &RenderOptions::decimal().with_max_fraction_digits(2))
    }

    /// Full digits below 10 000, compact groups from there on.
    pub fn format_compact(&self, value: f64) -> String {
        if value < COMPACT_THRESHOLD {
            return self.format_decimal_compact(value);
        }

        self.format_value(
            truncate_with(value, round_compact_decimals),
            &RenderOptions::decimal()
                .compact()
                .with_max_fraction_digits(2),
        )
    }

    /// Whole XTM in compact groups with exactly 2 fraction digits.
    pub fn format_xtm_compact(&self, value: f64) -> String {
        if value / 1_000_000.0 < XTM_DUST_LIMIT && value > 0.0 {
            return XTM_DUST_LABEL.to_string();
        }

        self.format_value(
            remove_xtm_crypto_decimals(truncate_with(value, round_compact_decimals)),
            &RenderOptions::decimal().compact().with_fraction_digits(2),
        )
    }

    /// Whole XTM truncated to at most 2 fraction digits.
    pub fn format_xtm_long(&self, value: f64) -> String {
        self.format_value(
            remove_xtm_crypto_decimals(truncate_with(value, round_to_two_decimals)),
            &RenderOptions::decimal().with_max_fraction_digits(2),
        )
    }

    /// Whole XTM with 2 to `max_fraction_digits` fraction digits, rounded by
    /// the renderer.
    pub fn format_xtm_long_dec(&self, value: f64, max_fraction_digits: u32) -> String {
        self.format_value(
            remove_xtm_crypto_decimals(value),
            &RenderOptions::decimal()
                .with_min_fraction_digits(2)
                .with_max_fraction_digits(max_fraction_digits),
        )
    }

    /// Whole XTM with all 6 fraction digits.
    pub fn format_xtm_decimals(&self, value: f64) -> String {
        self.format_value(
            remove_xtm_crypto_decimals(value),
            &RenderOptions::decimal().with_min_fraction_digits(6),
        )
    }
}

impl fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("locale", &self.locale.name())
            .field("config", &self.config)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

/// Format `value` with a preset in `locale`, using the standard renderer.
///
/// Convenience entry point for one-off calls; keep a [`NumberFormatter`]
/// around when formatting repeatedly.
pub fn format_number(value: f64, preset: FormatPreset, locale: &FormatLocale) -> String {
    NumberFormatter::for_locale(*locale).format(value, preset)
}
