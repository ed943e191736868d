// ============================================================================
// Domain Models Module
// Presets, renderer options and the standalone display helpers
// ============================================================================

pub mod config;
pub mod countdown;
pub mod hashrate;
pub mod preset;

pub use config::{
    FormatterConfig, Notation, NumberStyle, RenderOptions, DEFAULT_LONG_DEC_MAX_FRACTION_DIGITS,
    MAX_FRACTION_DIGITS,
};
pub use countdown::{format_countdown, format_countdown_at, parse_target_date, Countdown};
pub use hashrate::{format_hashrate, Hashrate};
pub use preset::{FormatPreset, ParsePresetError};
