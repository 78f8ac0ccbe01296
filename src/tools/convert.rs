//! Conversion MCP Tool
//!
//! One-shot conversion that does not touch the session.

use serde::Serialize;

use crate::conversion::{self, copy_text, find_unit, format_result, parse_category, parse_input, Category};

/// Response for convert
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: Category,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub input: String,
    pub value: f64,
    pub result: f64,
    pub formatted: String,
    pub copy_text: String,
}

/// Convert `input` from one unit to another
pub fn convert(category: &str, from_unit: &str, to_unit: &str, input: &str) -> Result<ConvertResponse, String> {
    let category = parse_category(category).map_err(|e| e.to_string())?;
    let value = parse_input(input).map_err(|e| e.to_string())?;
    let result = conversion::convert(category, from_unit, to_unit, value).map_err(|e| e.to_string())?;

    // Both keys resolved above; looked up again for their symbols
    let from = find_unit(category, from_unit).map_err(|e| e.to_string())?;
    let to = find_unit(category, to_unit).map_err(|e| e.to_string())?;
    let formatted = format_result(result);

    Ok(ConvertResponse {
        category,
        from_unit: from.key,
        to_unit: to.key,
        input: input.to_string(),
        value,
        result,
        copy_text: copy_text(input, from, &formatted, to),
        formatted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_tool() {
        let response = convert("length", "in", "cm", "1").unwrap();
        assert_eq!(response.formatted, "2.54");
        assert_eq!(response.copy_text, "1 in = 2.54 cm");
    }

    #[test]
    fn test_convert_tool_speed() {
        let response = convert("speed", "kmh", "mph", "100").unwrap();
        assert_eq!(response.formatted, "62.137119");
    }

    #[test]
    fn test_convert_tool_matches_engine() {
        let response = convert("temperature", "f", "c", "98.6").unwrap();
        let engine = conversion::convert(Category::Temperature, "f", "c", 98.6).unwrap();
        assert_eq!(response.result, engine);
        assert_eq!(response.copy_text, "98.6 °F = 37 °C");
    }

    #[test]
    fn test_convert_tool_checks_input_then_units() {
        let err = convert("data", "gb", "xyz", "").unwrap_err();
        assert!(err.contains("Invalid numeric input"));
        let err = convert("data", "gb", "xyz", "1").unwrap_err();
        assert_eq!(err, "Unknown unit key 'xyz' in category data");
    }

    #[test]
    fn test_convert_tool_errors() {
        assert!(convert("length", "xyz", "cm", "1").unwrap_err().contains("xyz"));
        assert!(convert("length", "in", "cm", "").unwrap_err().contains("Invalid numeric input"));
        assert!(convert("colour", "in", "cm", "1").unwrap_err().contains("Unknown category"));
    }
}
