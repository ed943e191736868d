// ============================================================================
// XTM Format Library
// Locale-aware display formatting for token amounts and mining figures
// ============================================================================

//! # XTM Format
//!
//! Turns raw numbers into display strings for a wallet and mining UI.
//!
//! ## Features
//!
//! - **Named presets** for token amounts, percentages and plain numbers
//! - **Truncating rounding** on fixed-point amounts, so `1.999999` never
//!   shows as `2.00`
//! - **Compact notation** (`12.34M`) that truncates within the displayed group
//! - **Explicit locale** for separators and digit grouping, no global state
//! - **Hashrate** scaling (`1.5 MH/s`) and **countdown** (`2D 5H 7M`) helpers
//!
//! ## Example
//!
//! ```rust
//! use xtm_format::prelude::*;
//! use std::sync::Arc;
//!
//! // Create a formatter for English separators
//! let formatter = NumberFormatterBuilder::new("en")
//!     .build(Arc::new(LoggingDiagnosticSink))
//!     .unwrap();
//!
//! // Balances arrive in micro-units (6 implied decimals)
//! assert_eq!(formatter.format(1_999_999.0, FormatPreset::XtmLong), "1.99");
//! assert_eq!(formatter.format(12_345_678_987_654.0, FormatPreset::XtmCompact), "12.34M");
//! assert_eq!(formatter.format(5_000.0, FormatPreset::XtmCompact), "< 0.01");
//!
//! // Presets can also be selected by their wire tag
//! assert_eq!(formatter.format_tag(0.4567, "percent"), "45.67%");
//! assert_eq!(formatter.format_tag(1.0, "no-such-preset"), "-");
//!
//! let rate = format_hashrate(1_500_000.0, true);
//! println!("{}{}", rate.value, rate.unit); // 1.5 MH/s
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        format_countdown, format_countdown_at, format_hashrate, Countdown, FormatPreset,
        FormatterConfig, Hashrate, Notation, NumberStyle, RenderOptions,
    };
    pub use crate::engine::{
        create_from_config, format_number, NumberFormatter, NumberFormatterBuilder,
    };
    pub use crate::interfaces::{
        Diagnostic, DiagnosticSink, FormatLocale, LocaleRenderer, LoggingDiagnosticSink,
        NoOpDiagnosticSink, StandardRenderer,
    };
    pub use crate::numeric::{round_compact_decimals, round_to_two_decimals, XtmAmount};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::DEFAULT_DECIMALS;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Sink that only counts what it receives
    #[derive(Default)]
    struct CountingSink(AtomicUsize);

    impl DiagnosticSink for CountingSink {
        fn on_diagnostic(&self, _diagnostic: Diagnostic) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_end_to_end_rounding() {
        assert_eq!(round_to_two_decimals(1_234_567, DEFAULT_DECIMALS), 1_230_000);
        assert_eq!(
            round_compact_decimals(12_345_678_987_654, DEFAULT_DECIMALS),
            12_340_000_000_000
        );
    }

    #[test]
    fn test_end_to_end_wallet_balance() {
        let formatter = create_from_config(FormatterConfig::english(), Arc::new(NoOpDiagnosticSink))
            .unwrap();

        let balance = XtmAmount::from_raw(12_345_678_987_654);
        assert_eq!(
            formatter.format_amount(balance, FormatPreset::XtmCompact),
            "12.34M"
        );
        assert_eq!(
            formatter.format_amount(balance, FormatPreset::XtmLong),
            "12,345,678.98"
        );
        assert_eq!(
            formatter.format_amount(balance, FormatPreset::XtmDecimals),
            "12,345,678.987654"
        );
        assert_eq!(
            formatter.format_amount(balance, FormatPreset::XtmLongDec),
            "12,345,678.9877"
        );
    }

    #[test]
    fn test_dust_below_one_cent() {
        let formatter = NumberFormatter::for_locale(FormatLocale::english());
        for raw in [1.0, 500.0, 9_999.0] {
            assert_eq!(formatter.format(raw, FormatPreset::XtmCompact), "< 0.01");
        }
    }

    #[test]
    fn test_unknown_tag_emits_exactly_one_diagnostic() {
        let sink = Arc::new(CountingSink::default());
        let formatter = NumberFormatterBuilder::new("en").build(sink.clone()).unwrap();

        assert_eq!(formatter.format_tag(42.0, "XTM_SUPER_COMPACT"), "-");
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);

        assert_eq!(formatter.format_tag(42.0, "decimal-compact"), "42");
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_same_value_in_two_locales() {
        let en = NumberFormatterBuilder::new("en")
            .build(Arc::new(NoOpDiagnosticSink))
            .unwrap();
        let de = NumberFormatterBuilder::new("de")
            .build(Arc::new(NoOpDiagnosticSink))
            .unwrap();

        assert_eq!(en.format(1_234_567.0, FormatPreset::XtmDecimals), "1.234567");
        assert_eq!(de.format(1_234_567.0, FormatPreset::XtmDecimals), "1,234567");
    }

    #[test]
    fn test_helpers() {
        let rate = format_hashrate(2_500.0, false);
        assert_eq!(rate.value, 2.5);
        assert_eq!(rate.unit, "k");

        assert_eq!(format_countdown("1999-12-31T23:59:59Z"), "0D 0H 0M");
    }

    #[test]
    fn test_shared_across_threads() {
        let formatter = Arc::new(NumberFormatter::for_locale(FormatLocale::english()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let formatter = Arc::clone(&formatter);
                std::thread::spawn(move || {
                    formatter.format((i as f64 + 1.0) * 1_000_000.0, FormatPreset::XtmLong)
                })
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["1", "2", "3", "4"]);
    }
}
