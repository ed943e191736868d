// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use xtm_format::numeric::XtmAmount;
use xtm_format::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = xtm_format::utils::init_tracing(tracing::Level::DEBUG) {
        eprintln!("{}", e);
    }

    println!("=== XTM Format Example ===\n");

    let formatter = NumberFormatterBuilder::new("en")
        .build(Arc::new(LoggingDiagnosticSink))
        .expect("valid configuration");

    // Wallet balances arrive in micro-units
    let balances: [i64; 5] = [
        1_234,
        1_999_999,
        123_456_789,
        1_999_999_999,
        12_345_678_987_654,
    ];

    println!(
        "{:>20} {:>12} {:>18} {:>22}",
        "raw", "xtm-compact", "xtm-crypto", "xtm-decimals"
    );
    for raw in balances {
        let amount = XtmAmount::from_raw(raw);
        println!(
            "{:>20} {:>12} {:>18} {:>22}",
            raw,
            formatter.format_amount(amount, FormatPreset::XtmCompact),
            formatter.format_amount(amount, FormatPreset::XtmLong),
            formatter.format_amount(amount, FormatPreset::XtmDecimals),
        );
    }

    println!("\nShares found: {}", formatter.format(1_234_567.0, FormatPreset::Compact));
    println!("Pool fee: {}", formatter.format(0.0125, FormatPreset::Percent));

    // Tags from a settings file may be stale
    println!("Stale tag: {}", formatter.format_tag(42.0, "xtm-super-compact"));

    let german = NumberFormatter::for_locale(FormatLocale::new("de"));
    println!(
        "\nSame balance in de: {}",
        german.format(12_345_678_987_654.0, FormatPreset::XtmLong)
    );

    println!("\nHashrates:");
    for rate in [512.0, 2_500.0, 1_500_000.0, 3.2e9, 7.25e12] {
        let joined = format_hashrate(rate, true);
        let bare = format_hashrate(rate, false);
        println!(
            "  {:>16} -> {}{}  ({} {})",
            rate, joined.value, joined.unit, bare.value, bare.unit
        );
    }

    println!(
        "\nNext halving in: {}",
        format_countdown("2030-01-01T00:00:00Z")
    );
}
