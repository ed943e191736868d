// ============================================================================
// Format Presets
// Closed set of formatting strategies selectable by callers
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formatting strategy applied by the number formatter.
///
/// Each preset has a stable wire tag (see [`FormatPreset::as_str`]) so it can
/// travel through settings files and frontend bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatPreset {
    /// Ratio rendered as a percentage, at most 2 fraction digits
    #[cfg_attr(feature = "serde", serde(rename = "percent"))]
    Percent,

    /// XTM micro-units rendered in full with 6 fraction digits
    #[cfg_attr(feature = "serde", serde(rename = "xtm-decimals"))]
    XtmDecimals,

    /// XTM micro-units rendered with K/M/B suffixes, exactly 2 fraction digits
    #[cfg_attr(feature = "serde", serde(rename = "xtm-compact"))]
    XtmCompact,

    /// XTM micro-units truncated to 2 fraction digits
    #[cfg_attr(feature = "serde", serde(rename = "xtm-crypto"))]
    XtmLong,

    /// XTM micro-units with 2 to N fraction digits, no truncation
    #[cfg_attr(feature = "serde", serde(rename = "xtm-long"))]
    XtmLongDec,

    /// Plain number, at most 2 fraction digits
    #[cfg_attr(feature = "serde", serde(rename = "decimal-compact"))]
    DecimalCompact,

    /// Plain number with K/M/B suffixes from 10 000 upwards
    #[cfg_attr(feature = "serde", serde(rename = "compact"))]
    Compact,
}

impl FormatPreset {
    /// Every preset, in declaration order.
    pub const ALL: [FormatPreset; 7] = [
        FormatPreset::Percent,
        FormatPreset::XtmDecimals,
        FormatPreset::XtmCompact,
        FormatPreset::XtmLong,
        FormatPreset::XtmLongDec,
        FormatPreset::DecimalCompact,
        FormatPreset::Compact,
    ];

    /// Wire tag of the preset.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormatPreset::Percent => "percent",
            FormatPreset::XtmDecimals => "xtm-decimals",
            FormatPreset::XtmCompact => "xtm-compact",
            FormatPreset::XtmLong => "xtm-crypto",
            FormatPreset::XtmLongDec => "xtm-long",
            FormatPreset::DecimalCompact => "decimal-compact",
            FormatPreset::Compact => "compact",
        }
    }

    /// Whether the preset expects a raw XTM amount in micro-units.
    pub const fn is_xtm(self) -> bool {
        matches!(
            self,
            FormatPreset::XtmDecimals
                | FormatPreset::XtmCompact
                | FormatPreset::XtmLong
                | FormatPreset::XtmLongDec
        )
    }
}

impl fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preset tag that names no known [`FormatPreset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError {
    tag: String,
}

impl ParsePresetError {
    /// The tag that failed to parse.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format preset: {:?}", self.tag)
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for FormatPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| ParsePresetError { tag: s.to_string() })
    }
}
