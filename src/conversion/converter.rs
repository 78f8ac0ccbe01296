//! Conversion functions
//!
//! Catalog lookups and value conversion. Every conversion is routed through
//! the category's base unit: `to.from_base(from.to_base(value))`.

use thiserror::Error;

use super::presets::{presets_for, QuickPreset};
use super::units::{Category, Unit};

/// Maximum fraction digits shown in a formatted result
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Unknown unit key '{key}' in category {category}")]
    UnknownUnitKey { category: &'static str, key: String },

    #[error("Invalid numeric input: '{0}'")]
    InvalidNumericInput(String),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// ============================================================================
// Catalog
// ============================================================================

/// All categories in their fixed display order
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Units of a category in catalog order
pub fn list_units(category: Category) -> &'static [Unit] {
    category.units()
}

/// Quick presets of a category
pub fn list_presets(category: Category) -> &'static [QuickPreset] {
    presets_for(category)
}

/// Resolve a category name
pub fn parse_category(name: &str) -> ConversionResult<Category> {
    Category::from_str(name).ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

/// Look up a unit by key within a category
pub fn find_unit(category: Category, key: &str) -> ConversionResult<&'static Unit> {
    category
        .units()
        .iter()
        .find(|u| u.key == key)
        .ok_or_else(|| ConversionError::UnknownUnitKey {
            category: category.as_str(),
            key: key.to_string(),
        })
}

/// The base unit of a category (the one with identity transforms)
pub fn base_unit(category: Category) -> &'static Unit {
    let units = category.units();
    units.iter().find(|u| u.is_base()).unwrap_or(&units[0])
}

/// Default (from, to) selection: index 0 and index 1, or index 0 twice
/// when the category has a single unit.
pub fn default_units(category: Category) -> (&'static Unit, &'static Unit) {
    let units = category.units();
    let from = &units[0];
    let to = units.get(1).unwrap_or(from);
    (from, to)
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert between two already resolved units of the same category
pub fn convert_between(from: &Unit, to: &Unit, value: f64) -> f64 {
    to.from_base(from.to_base(value))
}

/// Convert `value` from `from_key` to `to_key` within `category`
pub fn convert(category: Category, from_key: &str, to_key: &str, value: f64) -> ConversionResult<f64> {
    let from = find_unit(category, from_key)?;
    let to = find_unit(category, to_key)?;
    let result = convert_between(from, to, value);

    tracing::debug!(
        category = category.as_str(),
        from = from.key,
        to = to.key,
        value,
        result,
        "converted"
    );

    Ok(result)
}

// ============================================================================
// Input and presentation helpers
// ============================================================================

/// Parse user-edited input text into a number
///
/// Lenient in the same way a hand-typed numeric field usually is: leading
/// whitespace is skipped and the longest numeric prefix is taken, so
/// "12.5kg" reads as 12.5. Empty or non-numeric text is rejected.
pub fn parse_input(raw: &str) -> ConversionResult<f64> {
    let invalid = || ConversionError::InvalidNumericInput(raw.to_string());
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Ok(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return Err(invalid());
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().map_err(|_| invalid())
}

/// Format a converted value for display
///
/// At most six fraction digits, trailing zeros dropped, integer digits
/// grouped in threes with `,`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Text placed on the clipboard: "{input} {from} = {result} {to}"
pub fn copy_text(input: &str, from: &Unit, result: &str, to: &Unit) -> String {
    format!("{} {} = {} {}", input, from.symbol, result, to.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_inch_to_centimeter() {
        let cm = convert(Category::Length, "in", "cm", 1.0).unwrap();
        assert!(approx(cm, 2.54, 1e-12));
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        let c = convert(Category::Temperature, "f", "c", 98.6).unwrap();
        assert!(approx(c, 37.0, 1e-9));
    }

    #[test]
    fn test_pound_to_kilogram() {
        let kg = convert(Category::Weight, "lb", "kg", 1.0).unwrap();
        assert!(approx(kg, 0.45359237, 1e-12));
    }

    #[test]
    fn test_gigabyte_to_megabyte() {
        assert_eq!(convert(Category::Data, "gb", "mb", 1.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_pyeong_to_square_meter() {
        let m2 = convert(Category::Area, "pyeong", "m2", 1.0).unwrap();
        assert!(approx(m2, 3.305785, 1e-9));
    }

    #[test]
    fn test_unknown_unit_key() {
        for category in Category::ALL {
            let base = base_unit(category).key;
            let err = convert(category, "xyz", base, 1.0).unwrap_err();
            assert_eq!(
                err,
                ConversionError::UnknownUnitKey {
                    category: category.as_str(),
                    key: "xyz".to_string()
                }
            );
            assert!(convert(category, base, "xyz", 1.0).is_err());
        }
    }

    #[test]
    fn test_unit_keys_are_scoped_to_category() {
        // "cm" exists, but not as a weight
        assert!(convert(Category::Weight, "cm", "kg", 1.0).is_err());
    }

    #[test]
    fn test_identity_conversion() {
        for category in Category::ALL {
            for unit in category.units() {
                for x in [-40.0, 0.0, 1.0, 100.0, 1e6] {
                    let y = convert(category, unit.key, unit.key, x).unwrap();
                    assert!(approx(y, x, 1e-9 * x.abs().max(1.0)), "{} {}", unit.key, x);
                }
            }
        }
    }

    #[test]
    fn test_cross_check_via_base() {
        for category in Category::ALL {
            let base = base_unit(category).key;
            for a in category.units() {
                for b in category.units() {
                    for x in [-40.0, 1.0, 1e6] {
                        let direct = convert(category, a.key, b.key, x).unwrap();
                        let via = convert(category, a.key, base, x).unwrap();
                        let composed = convert(category, base, b.key, via).unwrap();
                        assert!(
                            approx(direct, composed, 1e-9 * direct.abs().max(1.0)),
                            "{}: {} -> {} of {}",
                            category.as_str(),
                            a.key,
                            b.key,
                            x
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_default_units() {
        let (from, to) = default_units(Category::Length);
        assert_eq!((from.key, to.key), ("mm", "cm"));
        let (from, to) = default_units(Category::Temperature);
        assert_eq!((from.key, to.key), ("c", "f"));
    }

    #[test]
    fn test_base_units() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| base_unit(*c).key).collect();
        assert_eq!(keys, vec!["m", "kg", "c", "m2", "l", "mps", "b"]);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Speed").unwrap(), Category::Speed);
        assert_eq!(
            parse_category("time").unwrap_err(),
            ConversionError::UnknownCategory("time".to_string())
        );
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("1").unwrap(), 1.0);
        assert_eq!(parse_input("  98.6").unwrap(), 98.6);
        assert_eq!(parse_input("-40").unwrap(), -40.0);
        assert_eq!(parse_input(".5").unwrap(), 0.5);
        assert_eq!(parse_input("5.").unwrap(), 5.0);
        assert_eq!(parse_input("1e3").unwrap(), 1000.0);
        assert_eq!(parse_input("2e").unwrap(), 2.0);
        assert_eq!(parse_input("12.5kg").unwrap(), 12.5);
        assert_eq!(parse_input("-Infinity").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_input_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "-", ".", "e5", "kg12"] {
            assert_eq!(
                parse_input(raw).unwrap_err(),
                ConversionError::InvalidNumericInput(raw.to_string())
            );
        }
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(2.54), "2.54");
        assert_eq!(format_result(1024.0), "1,024");
        assert_eq!(format_result(1_234_567.891), "1,234,567.891");
        assert_eq!(format_result(0.45359237), "0.453592");
        assert_eq!(format_result(-40.0), "-40");
        assert_eq!(format_result(100.0), "100");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0000001), "0");
        assert_eq!(format_result(f64::INFINITY), "∞");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_copy_text() {
        let from = find_unit(Category::Length, "in").unwrap();
        let to = find_unit(Category::Length, "cm").unwrap();
        assert_eq!(copy_text("1", from, "2.54", to), "1 in = 2.54 cm");
    }
}
