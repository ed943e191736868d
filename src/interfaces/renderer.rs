// ============================================================================
// Locale Renderer Interface
// Turns an already-rounded value into a locale-formatted string
// ============================================================================

use crate::domain::{Notation, NumberStyle, RenderOptions};
use num_format::ToFormattedString;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Suffixes for thousands groups in compact notation, index = group count
const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

const PERCENT_SIGN: &str = "%";

const INFINITY_SIGN: &str = "∞";

/// Compact numbers with fewer integer digits than this are not grouped
/// (`2500T`, but `12,500T`).
const COMPACT_MIN_GROUPING_DIGITS: usize = 5;

// ============================================================================
// Locale
// ============================================================================

/// Locale whose separators and digit grouping the renderer follows.
///
/// Always passed explicitly; nothing in the crate reads a process-wide
/// language setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatLocale {
    inner: num_format::Locale,
}

impl FormatLocale {
    /// Look up a locale by name ("en", "de", "fr-CH", ...).
    ///
    /// Region-qualified names that are not known on their own fall back to
    /// their language ("en-GB" -> "en").
    pub fn try_new(name: &str) -> Option<Self> {
        let name = name.trim();
        num_format::Locale::from_name(name)
            .ok()
            .or_else(|| {
                let language = name.split(['-', '_']).next()?;
                num_format::Locale::from_name(language).ok()
            })
            .map(|inner| Self { inner })
    }

    /// Look up a locale by name, falling back to English when it is unknown.
    pub fn new(name: &str) -> Self {
        Self::try_new(name).unwrap_or_else(|| {
            tracing::warn!(locale = name, "Unknown locale, falling back to en");
            Self::english()
        })
    }

    /// English: `1,234.56`
    pub fn english() -> Self {
        Self {
            inner: num_format::Locale::en,
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Decimal point
    pub fn decimal(&self) -> &'static str {
        self.inner.decimal()
    }

    /// Thousands separator
    pub fn separator(&self) -> &'static str {
        self.inner.separator()
    }

    pub fn minus_sign(&self) -> &'static str {
        self.inner.minus_sign()
    }

    /// Group the digits of a non-negative integer string.
    ///
    /// Digit strings wider than u128 are returned ungrouped.
    fn group_integer(&self, digits: &str) -> String {
        match digits.parse::<u128>() {
            Ok(n) => n.to_formatted_string(&self.inner),
            Err(_) => digits.to_string(),
        }
    }
}

impl Default for FormatLocale {
    fn default() -> Self {
        Self::english()
    }
}

// ============================================================================
// Renderer Trait
// ============================================================================

/// Locale-aware number renderer used by the number formatter.
///
/// Implementations receive the value after any preset-specific truncation
/// and only apply the presentation described by `options`.
pub trait LocaleRenderer: Send + Sync {
    /// Render `value` according to `options` in `locale`
    fn render(&self, value: f64, options: &RenderOptions, locale: &FormatLocale) -> String;

    /// Renderer name for logging
    fn name(&self) -> &str;
}

/// Default renderer.
///
/// - Rounds half away from zero on the shortest decimal that reads back as
///   the input, so `1.005` rounds to `1.01`
/// - Pads to the minimum fraction digits, trims trailing zeros above it
/// - Percent style multiplies by 100 and appends `%`
/// - Compact notation abbreviates thousands groups with K, M, B, T and only
///   groups integer parts of five or more digits
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl StandardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Pick the compact group for `value` and round within it.
    ///
    /// A rounding carry that reaches 1000 moves to the next group, so
    /// 999.999K with two digits becomes 1M rather than 1000K.
    fn round_compact(value: Decimal, max_digits: u32) -> Option<(Decimal, &'static str)> {
        let thousand = Decimal::ONE_THOUSAND;
        let last = COMPACT_SUFFIXES.len() - 1;

        let mut group = 0;
        let mut divisor = Decimal::ONE;
        while group < last && value.abs() >= divisor.checked_mul(thousand)? {
            divisor = divisor.checked_mul(thousand)?;
            group += 1;
        }

        let mut rounded = value
            .checked_div(divisor)?
            .round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero);
        if group < last && rounded.abs() >= thousand {
            divisor = divisor.checked_mul(thousand)?;
            group += 1;
            rounded = value
                .checked_div(divisor)?
                .round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero);
        }

        Some((rounded, COMPACT_SUFFIXES[group]))
    }

    /// The shortest decimal that reads back as `value`.
    ///
    /// `f64` display never switches to exponent form. Inputs with more
    /// digits than a Decimal holds fall back to the exact binary value.
    fn shortest_decimal(value: f64) -> Option<Decimal> {
        Decimal::from_str(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64_retain(value))
    }

    /// Decimal rounding; `None` when the value leaves the Decimal range.
    fn round_decimal(
        value: f64,
        options: &RenderOptions,
        max_digits: u32,
    ) -> Option<(Decimal, &'static str)> {
        let mut decimal = Self::shortest_decimal(value)?;
        if options.style == NumberStyle::Percent {
            decimal = decimal.checked_mul(Decimal::ONE_HUNDRED)?;
        }

        match options.notation {
            Notation::Compact => Self::round_compact(decimal, max_digits),
            Notation::Standard => Some((
                decimal.round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero),
                "",
            )),
        }
    }

    fn assemble(
        negative: bool,
        digits: &str,
        min_digits: u32,
        suffix: &str,
        options: &RenderOptions,
        locale: &FormatLocale,
    ) -> String {
        let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits, ""));

        let mut fraction = frac_digits;
        while fraction.len() > min_digits as usize && fraction.ends_with('0') {
            fraction = &fraction[..fraction.len() - 1];
        }

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push_str(locale.minus_sign());
        }
        if options.notation == Notation::Compact
            && int_digits.len() < COMPACT_MIN_GROUPING_DIGITS
        {
            out.push_str(int_digits);
        } else {
            out.push_str(&locale.group_integer(int_digits));
        }
        if !fraction.is_empty() {
            out.push_str(locale.decimal());
            out.push_str(fraction);
        }
        out.push_str(suffix);
        if options.style == NumberStyle::Percent {
            out.push_str(PERCENT_SIGN);
        }
        out
    }
}

impl LocaleRenderer for StandardRenderer {
    fn render(&self, value: f64, options: &RenderOptions, locale: &FormatLocale) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let percent = if options.style == NumberStyle::Percent {
            PERCENT_SIGN
        } else {
            ""
        };
        if value.is_infinite() {
            let sign = if value < 0.0 { locale.minus_sign() } else { "" };
            return format!("{}{}{}", sign, INFINITY_SIGN, percent);
        }

        let (min_digits, max_digits) = options.fraction_digits();

        match Self::round_decimal(value, options, max_digits) {
            Some((rounded, suffix)) => {
                // A value that rounds away entirely is written without a sign
                let negative = rounded.is_sign_negative() && !rounded.is_zero();
                let digits = format!("{:.*}", max_digits as usize, rounded.abs());
                Self::assemble(negative, &digits, min_digits, suffix, options, locale)
            }
            None => {
                // Beyond the Decimal range: no compact grouping, float digits
                let scaled = if options.style == NumberStyle::Percent {
                    value * 100.0
                } else {
                    value
                };
                let digits = format!("{:.*}", max_digits as usize, scaled.abs());
                Self::assemble(scaled < 0.0, &digits, min_digits, "", options, locale)
            }
        }
    }

    fn name(&self) -> &str {
        "standard"
    }
}
