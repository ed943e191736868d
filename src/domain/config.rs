// ============================================================================
// Formatter Configuration
// Renderer options per call and formatter-wide settings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest fraction digit count the renderer honours.
pub const MAX_FRACTION_DIGITS: u32 = 20;

// ============================================================================
// Render Options
// ============================================================================

/// How the value itself is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberStyle {
    /// Plain number
    #[default]
    Decimal,
    /// Ratio, multiplied by 100 and suffixed with `%`
    Percent,
}

/// How magnitudes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// All integer digits, grouped
    #[default]
    Standard,
    /// Thousands groups abbreviated with K, M, B, T
    Compact,
}

/// Configuration record handed to the locale renderer on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderOptions {
    pub style: NumberStyle,

    pub notation: Notation,

    /// Fraction digits always written (padded with zeros). Defaults to 0.
    pub minimum_fraction_digits: Option<u32>,

    /// Fraction digits at most written. Defaults to `max(min, 3)` for
    /// decimals and `max(min, 0)` for percentages.
    pub maximum_fraction_digits: Option<u32>,
}

impl RenderOptions {
    /// Plain decimal, standard notation, default fraction digits
    pub fn decimal() -> Self {
        Self::default()
    }

    /// Percentage, standard notation, default fraction digits
    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            ..Self::default()
        }
    }

    /// Builder method: Use compact notation
    pub fn compact(mut self) -> Self {
        self.notation = Notation::Compact;
        self
    }

    /// Builder method: Set minimum fraction digits
    pub fn with_min_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Builder method: Set maximum fraction digits
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Builder method: Set minimum and maximum fraction digits to the same count
    pub fn with_fraction_digits(self, digits: u32) -> Self {
        self.with_min_fraction_digits(digits)
            .with_max_fraction_digits(digits)
    }

    /// Resolve the effective `(min, max)` fraction digits.
    ///
    /// A maximum below the minimum is raised to the minimum and both are
    /// capped at [`MAX_FRACTION_DIGITS`].
    pub fn fraction_digits(&self) -> (u32, u32) {
        let min = self
            .minimum_fraction_digits
            .unwrap_or(0)
            .min(MAX_FRACTION_DIGITS);
        let default_max = match self.style {
            NumberStyle::Decimal => 3,
            NumberStyle::Percent => 0,
        };
        let max = self
            .maximum_fraction_digits
            .unwrap_or(default_max.max(min))
            .clamp(min, MAX_FRACTION_DIGITS);
        (min, max)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), String> {
        if let Some(min) = self.minimum_fraction_digits {
            if min > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "Minimum fraction digits cannot exceed {}",
                    MAX_FRACTION_DIGITS
                ));
            }
        }

        if let Some(max) = self.maximum_fraction_digits {
            if max > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "Maximum fraction digits cannot exceed {}",
                    MAX_FRACTION_DIGITS
                ));
            }
            if max < self.minimum_fraction_digits.unwrap_or(0) {
                return Err("Maximum fraction digits cannot be below the minimum".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Default upper bound of fraction digits for the `xtm-long` preset
pub const DEFAULT_LONG_DEC_MAX_FRACTION_DIGITS: u32 = 4;

/// Settings shared by every call on a number formatter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatterConfig {
    /// Locale name used for separators (e.g. "en", "de", "fr")
    pub locale: String,

    /// Maximum fraction digits written by the `xtm-long` preset
    pub long_dec_max_fraction_digits: u32,
}

impl FormatterConfig {
    /// Create a new configuration for a locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            long_dec_max_fraction_digits: DEFAULT_LONG_DEC_MAX_FRACTION_DIGITS,
        }
    }

    /// English separators (`1,234.56`)
    pub fn english() -> Self {
        Self::new("en")
    }

    /// Builder method: Set the maximum fraction digits of the `xtm-long` preset
    pub fn with_long_dec_fraction_digits(mut self, digits: u32) -> Self {
        self.long_dec_max_fraction_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.trim().is_empty() {
            return Err("Locale cannot be empty".to_string());
        }

        // xtm-long always writes at least two fraction digits
        if !(2..=MAX_FRACTION_DIGITS).contains(&self.long_dec_max_fraction_digits) {
            return Err(format!(
                "Long decimal fraction digits must be between 2 and {}",
                MAX_FRACTION_DIGITS
            ));
        }

        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_digit_defaults() {
        assert_eq!(RenderOptions::decimal().fraction_digits(), (0, 3));
        assert_eq!(RenderOptions::percent().fraction_digits(), (0, 0));
        assert_eq!(
            RenderOptions::decimal()
                .with_min_fraction_digits(6)
                .fraction_digits(),
            (6, 6)
        );
        assert_eq!(
            RenderOptions::percent()
                .with_max_fraction_digits(2)
                .fraction_digits(),
            (0, 2)
        );
    }

    #[test]
    fn test_fraction_digits_clamped() {
        let inverted = RenderOptions::decimal()
            .with_min_fraction_digits(4)
            .with_max_fraction_digits(1);
        assert_eq!(inverted.fraction_digits(), (4, 4));
        assert!(inverted.validate().is_err());

        let huge = RenderOptions::decimal().with_fraction_digits(50);
        assert_eq!(huge.fraction_digits(), (20, 20));
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::decimal().compact().with_fraction_digits(2);
        assert_eq!(options.notation, Notation::Compact);
        assert_eq!(options.style, NumberStyle::Decimal);
        assert_eq!(options.minimum_fraction_digits, Some(2));
        assert_eq!(options.maximum_fraction_digits, Some(2));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_config_creation() {
        let config = FormatterConfig::new("de");
        assert_eq!(config.locale, "de");
        assert_eq!(
            config.long_dec_max_fraction_digits,
            DEFAULT_LONG_DEC_MAX_FRACTION_DIGITS
        );
        assert!(config.validate().is_ok());
        assert_eq!(FormatterConfig::default(), FormatterConfig::english());
    }

    #[test]
    fn test_config_validation() {
        assert!(FormatterConfig::new("  ").validate().is_err());
        assert!(FormatterConfig::english()
            .with_long_dec_fraction_digits(1)
            .validate()
            .is_err());
        assert!(FormatterConfig::english()
            .with_long_dec_fraction_digits(8)
            .validate()
            .is_ok());
    }
}
