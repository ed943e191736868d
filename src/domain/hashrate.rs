// ============================================================================
// Hashrate
// Scale a raw hashes-per-second figure into a display value and unit
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Hashrate split into a rounded value and its unit suffix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hashrate {
    pub value: f64,
    pub unit: &'static str,
}

/// Unit written for rates below 1 kH/s, joined or not.
pub const BASE_UNIT: &str = "H/s";

/// (upper bound, scale, joined unit, bare prefix); the last band is open
const BANDS: [(f64, f64, &str, &str); 5] = [
    (1e6, 1e3, " kH/s", "k"),
    (1e9, 1e6, " MH/s", "M"),
    (1e12, 1e9, " GH/s", "G"),
    (1e15, 1e12, " TH/s", "T"),
    (f64::INFINITY, 1e15, " PH/s", "P"),
];

/// Round half-up to 2 decimals on the exact binary value of `x`.
fn round_two_places(x: f64) -> f64 {
    Decimal::from_f64_retain(x)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(x)
}

/// Pick the largest unit that keeps the value at or above 1.
///
/// With `join_unit` the unit is ready to append (`" MH/s"`); without it only
/// the SI prefix is returned (`"M"`) so the caller can lay out the suffix.
/// Rates below 1000 are returned untouched with `"H/s"` either way.
///
/// ```
/// use xtm_format::domain::format_hashrate;
///
/// let rate = format_hashrate(1_500_000.0, true);
/// assert_eq!(rate.value, 1.5);
/// assert_eq!(rate.unit, " MH/s");
/// ```
pub fn format_hashrate(hashrate: f64, join_unit: bool) -> Hashrate {
    if hashrate < 1e3 {
        return Hashrate {
            value: hashrate,
            unit: BASE_UNIT,
        };
    }

    let (_, scale, joined, bare) = BANDS
        .iter()
        .copied()
        .find(|(limit, ..)| hashrate < *limit)
        .unwrap_or(BANDS[BANDS.len() - 1]);

    Hashrate {
        value: round_two_places(hashrate / scale),
        unit: if join_unit { joined } else { bare },
    }
}
