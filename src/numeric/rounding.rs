// ============================================================================
// Truncating Rounding
// Decimal shifting and round-down helpers applied before locale rendering
// ============================================================================
//
// The locale renderer rounds half away from zero. A 6-decimal amount such as
// 1_999_999 (1.999999) would render as "2.00" with two fraction digits even
// though the holder owns less than 2. These helpers truncate at the source so
// the renderer only ever sees digits that are already exact.

/// Implied decimal places of an XTM amount (1 XTM = 10^6 micro-units).
pub const XTM_DECIMALS: u32 = 6;

/// Scale assumed by the rounding helpers when the caller has no other.
pub const DEFAULT_DECIMALS: u32 = XTM_DECIMALS;

/// 10^n, or `None` once it no longer fits in an i64.
#[inline]
fn pow10(n: u32) -> Option<i64> {
    10i64.checked_pow(n)
}

/// Shift a fixed-point value to its true decimal value (`value / 10^decimals`).
#[inline]
pub fn remove_decimals(value: f64, decimals: u32) -> f64 {
    value / 10f64.powi(decimals as i32)
}

/// Shift a raw XTM amount (micro-units) to whole XTM.
#[inline]
pub fn remove_xtm_crypto_decimals(value: f64) -> f64 {
    remove_decimals(value, XTM_DECIMALS)
}

/// Truncate a fixed-point value to two decimal places at the given scale.
///
/// Zeroes the low `decimals - 2` digits of the raw value. Scales of two or
/// fewer decimals have nothing to drop and are returned unchanged.
///
/// # Examples
/// ```
/// use xtm_format::numeric::round_to_two_decimals;
///
/// assert_eq!(round_to_two_decimals(1_234, 6), 0);
/// assert_eq!(round_to_two_decimals(1_234_567, 6), 1_230_000);
/// assert_eq!(round_to_two_decimals(123_456_789, 6), 123_450_000);
/// assert_eq!(round_to_two_decimals(12_345_678_987_654, 6), 12_345_678_980_000);
/// ```
///
/// Negative values truncate toward zero (`%` keeps the sign of the dividend).
#[inline]
pub fn round_to_two_decimals(value: i64, decimals: u32) -> i64 {
    if decimals <= 2 {
        return value;
    }

    match pow10(decimals - 2) {
        Some(unit) => value - value % unit,
        // Every representable value is below one unit
        None => 0,
    }
}

/// Truncate a fixed-point value to two decimals within its compact group.
///
/// Compact notation renders `12_345_678.987654` as `12.34M`, so the digits
/// worth keeping are the first two decimals of the value counted in
/// thousands, millions, and so on, not the first two decimals of the amount.
/// The result stays in the original fixed-point scale.
///
/// 1. Below `10^(decimals - 2)` the value has no visible digits: 0.
/// 2. Below `10^decimals` (one whole unit) it truncates like
///    [`round_to_two_decimals`].
/// 3. Otherwise it is divided by 1000 until it drops below 1000, truncated to
///    two decimals there, and scaled back.
///
/// # Examples
/// ```
/// use xtm_format::numeric::round_compact_decimals;
///
/// assert_eq!(round_compact_decimals(1_234, 6), 0);
/// assert_eq!(round_compact_decimals(1_234_567, 6), 1_230_000);
/// assert_eq!(round_compact_decimals(123_456_789, 6), 123_450_000);
/// assert_eq!(round_compact_decimals(12_345_678_987_654, 6), 12_340_000_000_000);
/// ```
///
/// Every negative value falls under step 1 and yields 0.
pub fn round_compact_decimals(value: i64, decimals: u32) -> i64 {
    // Below two decimals the smallest unit is fractional; for integers
    // `value < 0.1` and `value < 1` select the same values.
    let smallest = pow10(decimals.saturating_sub(2));
    if smallest.map_or(true, |unit| value < unit) {
        return 0;
    }

    if pow10(decimals).map_or(true, |whole| value < whole) {
        return round_to_two_decimals(value, decimals);
    }

    let mut unit_index: u32 = 0;
    let mut scaled = value;
    while scaled >= 1000 {
        scaled /= 1000;
        unit_index += 1;
    }

    if unit_index == 0 {
        return value;
    }

    // Two decimals of the scaled value sit 3 * unit_index - 2 digits above
    // the raw units. i64::MAX has at most 6 groups, so this stays in range.
    let step = 10i64.pow(3 * unit_index - 2);
    value - value % step
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_to_two_decimals_examples() {
        assert_eq!(round_to_two_decimals(1_234, DEFAULT_DECIMALS), 0);
        assert_eq!(round_to_two_decimals(1_234_567, DEFAULT_DECIMALS), 1_230_000);
        assert_eq!(
            round_to_two_decimals(123_456_789, DEFAULT_DECIMALS),
            123_450_000
        );
        assert_eq!(
            round_to_two_decimals(12_345_678_987_654, DEFAULT_DECIMALS),
            12_345_678_980_000
        );
    }

    #[test]
    fn test_round_compact_decimals_examples() {
        assert_eq!(round_compact_decimals(1_234, DEFAULT_DECIMALS), 0);
        assert_eq!(round_compact_decimals(1_234_567, DEFAULT_DECIMALS), 1_230_000);
        assert_eq!(
            round_compact_decimals(123_456_789, DEFAULT_DECIMALS),
            123_450_000
        );
        assert_eq!(
            round_compact_decimals(12_345_678_987_654, DEFAULT_DECIMALS),
            12_340_000_000_000
        );
    }

    #[test]
    fn test_round_to_two_decimals_small_scale_is_identity() {
        for decimals in 0..=2 {
            assert_eq!(round_to_two_decimals(1_234_567, decimals), 1_234_567);
            assert_eq!(round_to_two_decimals(-15, decimals), -15);
        }
    }

    #[test]
    fn test_round_to_two_decimals_other_scales() {
        // 9 decimals: keep 10^7 and above
        assert_eq!(round_to_two_decimals(1_987_654_321, 9), 1_980_000_000);
        // 3 decimals: drop one digit
        assert_eq!(round_to_two_decimals(12_345, 3), 12_340);
    }

    #[test]
    fn test_round_to_two_decimals_huge_scale() {
        assert_eq!(round_to_two_decimals(i64::MAX, 40), 0);
    }

    #[test]
    fn test_round_to_two_decimals_negative_truncates_toward_zero() {
        assert_eq!(round_to_two_decimals(-1_234_567, DEFAULT_DECIMALS), -1_230_000);
    }

    #[test]
    fn test_round_compact_decimals_boundaries() {
        // Exactly one visible unit (0.01)
        assert_eq!(round_compact_decimals(10_000, DEFAULT_DECIMALS), 10_000);
        assert_eq!(round_compact_decimals(9_999, DEFAULT_DECIMALS), 0);
        // Just below one whole unit
        assert_eq!(round_compact_decimals(999_999, DEFAULT_DECIMALS), 990_000);
        // One whole unit is the first grouped value: 1.000000 -> 1.00
        assert_eq!(round_compact_decimals(1_000_000, DEFAULT_DECIMALS), 1_000_000);
        // 999.999999 -> 999.99
        assert_eq!(
            round_compact_decimals(999_999_999, DEFAULT_DECIMALS),
            999_990_000
        );
        // 1999.999999 XTM -> 1.99K
        assert_eq!(
            round_compact_decimals(1_999_999_999, DEFAULT_DECIMALS),
            1_990_000_000
        );
    }

    #[test]
    fn test_round_compact_decimals_small_scale() {
        // decimals = 0: every positive integer is visible, below 1000 untouched
        assert_eq!(round_compact_decimals(0, 0), 0);
        assert_eq!(round_compact_decimals(999, 0), 999);
        assert_eq!(round_compact_decimals(12_345, 0), 12_340);
        // decimals = 2: below 1000 there is no group to truncate in
        assert_eq!(round_compact_decimals(150, 2), 150);
    }

    #[test]
    fn test_round_compact_decimals_negative_is_zero() {
        assert_eq!(round_compact_decimals(-1, DEFAULT_DECIMALS), 0);
        assert_eq!(round_compact_decimals(-12_345_678_987_654, DEFAULT_DECIMALS), 0);
    }

    #[test]
    fn test_round_compact_decimals_max_value() {
        // Six thousand-groups deep: only 9.22 of the top group survives
        assert_eq!(
            round_compact_decimals(i64::MAX, DEFAULT_DECIMALS),
            9_220_000_000_000_000_000
        );
    }

    #[test]
    fn test_remove_decimals() {
        assert_eq!(remove_decimals(1_234_567.0, 6), 1.234567);
        assert_eq!(remove_decimals(150.0, 2), 1.5);
        assert_eq!(remove_decimals(42.0, 0), 42.0);
        assert_eq!(remove_xtm_crypto_decimals(2_500_000.0), 2.5);
    }

    proptest! {
        #[test]
        fn prop_small_scale_is_identity(value in any::<i64>(), decimals in 0u32..=2) {
            prop_assert_eq!(round_to_two_decimals(value, decimals), value);
        }

        #[test]
        fn prop_round_to_two_decimals_idempotent(value in 0i64..i64::MAX, decimals in 0u32..=20) {
            let once = round_to_two_decimals(value, decimals);
            prop_assert_eq!(round_to_two_decimals(once, decimals), once);
        }

        #[test]
        fn prop_round_compact_decimals_idempotent(value in 0i64..i64::MAX, decimals in 0u32..=18) {
            let once = round_compact_decimals(value, decimals);
            prop_assert_eq!(round_compact_decimals(once, decimals), once);
        }

        #[test]
        fn prop_below_smallest_unit_is_zero(decimals in 2u32..=18, fraction in 0.0f64..1.0) {
            let unit = 10i64.pow(decimals - 2);
            let value = ((unit as f64) * fraction) as i64;
            prop_assume!(value < unit);
            prop_assert_eq!(round_compact_decimals(value, decimals), 0);
        }

        #[test]
        fn prop_truncation_never_rounds_up(value in 0i64..i64::MAX, decimals in 0u32..=18) {
            prop_assert!(round_to_two_decimals(value, decimals) <= value);
            prop_assert!(round_compact_decimals(value, decimals) <= value);
        }
    }
}
