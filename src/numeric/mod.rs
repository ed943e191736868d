// ============================================================================
// Numeric Module
// Fixed-point amounts and the truncating rounding that precedes rendering
// ============================================================================
//
// This module provides:
// - Decimal shift helpers (raw fixed-point integer -> true decimal value)
// - round_to_two_decimals / round_compact_decimals: truncating rounding that
//   keeps the renderer's round-half-up from pushing a value past what it holds
// - FixedDecimal<D>: typed fixed-point amount, XtmAmount for 6-decimal tokens
// - NumericError: Error type for amount construction
//
// Design principles:
// - Rounding is exact integer arithmetic on the raw i64 value
// - Truncation is toward zero, matching `%` on the raw value
// - Only the final shift to a display value produces an f64

mod errors;
mod fixed_decimal;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, XtmAmount};
pub use rounding::{
    remove_decimals, remove_xtm_crypto_decimals, round_compact_decimals, round_to_two_decimals,
    DEFAULT_DECIMALS, XTM_DECIMALS,
};
