//! Conversion engine
//!
//! Static catalog of categories, units and quick presets plus the pure
//! conversion functions that operate on it.

pub mod converter;
pub mod presets;
pub mod units;

pub use converter::{
    base_unit, convert, convert_between, copy_text, default_units, find_unit, format_result,
    list_categories, list_presets, list_units, parse_category, parse_input, ConversionError,
    ConversionResult,
};
pub use presets::QuickPreset;
pub use units::{Category, Transform, Unit};
