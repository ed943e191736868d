// ============================================================================
// Fixed-Point Amount
// Integer-scaled token amount with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::{remove_decimals, round_compact_decimals, round_to_two_decimals};

/// Fixed-point amount with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64, the same encoding
/// wallets and nodes report token balances in.
///
/// # Type Parameter
/// - `DECIMALS`: Number of implied decimal places (0-18). Default is 6.
///
/// # Example
/// ```
/// use xtm_format::numeric::XtmAmount;
///
/// let balance = XtmAmount::from_raw(1_234_567);
/// assert_eq!(balance.integer_part(), 1);
/// assert_eq!(balance.round_to_two_decimals().raw_value(), 1_230_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 6>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One whole unit
    pub const ONE: Self = Self(pow10(D));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the raw scaled value (e.g. micro-units reported by a wallet).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of units.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive raw value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Display Preparation
    // ========================================================================

    /// True decimal value as a float, for handing to the renderer.
    #[inline]
    pub fn to_f64(self) -> f64 {
        remove_decimals(self.0 as f64, D as u32)
    }

    /// Drop everything below the second decimal place.
    #[inline]
    pub fn round_to_two_decimals(self) -> Self {
        Self(round_to_two_decimals(self.0, D as u32))
    }

    /// Drop everything below the second decimal of the compact group
    /// (K, M, B, ...) the amount falls into.
    #[inline]
    pub fn round_compact_decimals(self) -> Self {
        Self(round_compact_decimals(self.0, D as u32))
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// XTM amount in micro-units (6 implied decimal places)
pub type XtmAmount = FixedDecimal<6>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(XtmAmount::SCALE, 1_000_000);
        assert_eq!(XtmAmount::ZERO.raw_value(), 0);
        assert_eq!(XtmAmount::ONE.raw_value(), 1_000_000);
    }

    #[test]
    fn test_from_integer() {
        let x = XtmAmount::from_integer(100).unwrap();
        assert_eq!(x.raw_value(), 100_000_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);

        assert_eq!(
            XtmAmount::from_integer(i64::MAX),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_parts() {
        let x = XtmAmount::from_raw(123_456_000);
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 456_000);

        let y = XtmAmount::from_raw(-5_500_000);
        assert_eq!(y.integer_part(), -5);
        assert_eq!(y.fractional_part(), 500_000);
        assert!(y.is_negative());
        assert!(!y.is_positive());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(XtmAmount::from_raw(2_500_000).to_f64(), 2.5);
        assert_eq!(FixedDecimal::<2>::from_raw(150).to_f64(), 1.5);
    }

    #[test]
    fn test_rounding_methods() {
        let amount = XtmAmount::from_raw(12_345_678_987_654);
        assert_eq!(
            amount.round_to_two_decimals().raw_value(),
            12_345_678_980_000
        );
        assert_eq!(
            amount.round_compact_decimals().raw_value(),
            12_340_000_000_000
        );

        let dust = XtmAmount::from_raw(1_234);
        assert!(dust.round_to_two_decimals().is_zero());
        assert!(dust.round_compact_decimals().is_zero());
    }

    #[test]
    fn test_comparison() {
        let a = XtmAmount::from_integer(100).unwrap();
        let b = XtmAmount::from_integer(50).unwrap();
        assert!(a > b);
        assert_eq!(a.max(b), a);
    }
}
