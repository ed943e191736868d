// ============================================================================
// Engine Module
// Contains the preset dispatcher and its construction
// ============================================================================

mod number_formatter;

pub mod factory;

pub use factory::{create_from_config, create_with_renderer, NumberFormatterBuilder};
pub use number_formatter::{format_number, NumberFormatter, UNKNOWN_PRESET_LABEL, XTM_DUST_LABEL};
