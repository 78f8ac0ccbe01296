//! Session MCP Tools
//!
//! Tools that drive the converter session: category and unit selection,
//! input, presets and copy text.

use serde::Serialize;

use crate::conversion::parse_category;
use crate::session::{ConverterSession, SessionSnapshot};

/// Response for copy_result
#[derive(Debug, Serialize)]
pub struct CopyResultResponse {
    pub text: String,
}

pub fn get_session(session: &ConverterSession) -> SessionSnapshot {
    session.snapshot()
}

pub fn select_category(session: &mut ConverterSession, category: &str) -> Result<SessionSnapshot, String> {
    let category = parse_category(category).map_err(|e| e.to_string())?;
    session.select_category(category);
    Ok(session.snapshot())
}

pub fn select_units(
    session: &mut ConverterSession,
    from_unit: Option<&str>,
    to_unit: Option<&str>,
) -> Result<SessionSnapshot, String> {
    session
        .select_units(from_unit, to_unit)
        .map_err(|e| format!("Failed to select units: {}", e))?;
    Ok(session.snapshot())
}

pub fn swap_units(session: &mut ConverterSession) -> SessionSnapshot {
    session.swap_units();
    session.snapshot()
}

pub fn set_input(session: &mut ConverterSession, value: &str) -> SessionSnapshot {
    session.set_input(value);
    session.snapshot()
}

pub fn apply_preset(session: &mut ConverterSession, index: usize) -> Result<SessionSnapshot, String> {
    session
        .apply_preset(index)
        .map_err(|e| format!("Failed to apply preset: {}", e))?;
    Ok(session.snapshot())
}

pub fn copy_result(session: &ConverterSession) -> Result<CopyResultResponse, String> {
    session
        .copy_text()
        .map(|text| CopyResultResponse { text })
        .ok_or_else(|| "Nothing to copy: enter a value to convert first".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::Category;

    #[test]
    fn test_select_category_tool() {
        let mut session = ConverterSession::default();
        let snapshot = select_category(&mut session, "volume").unwrap();
        assert_eq!(snapshot.category, Category::Volume);
        assert_eq!(snapshot.from_unit.key, "ml");
        assert_eq!(snapshot.to_unit.key, "l");
        assert!(select_category(&mut session, "nope").is_err());
    }

    #[test]
    fn test_select_units_tool() {
        let mut session = ConverterSession::default();
        let snapshot = select_units(&mut session, None, Some("ft")).unwrap();
        assert_eq!(snapshot.from_unit.key, "mm");
        assert_eq!(snapshot.to_unit.key, "ft");
        let err = select_units(&mut session, Some("lb"), None).unwrap_err();
        assert!(err.starts_with("Failed to select units"));
    }

    #[test]
    fn test_apply_preset_and_copy() {
        let mut session = ConverterSession::default();
        select_category(&mut session, "data").unwrap();
        let snapshot = apply_preset(&mut session, 0).unwrap();
        assert_eq!(snapshot.result.as_deref(), Some("1,024"));
        assert_eq!(copy_result(&session).unwrap().text, "1 GB = 1,024 MB");
    }

    #[test]
    fn test_copy_without_result() {
        let mut session = ConverterSession::default();
        set_input(&mut session, "");
        assert!(copy_result(&session).is_err());
    }

    #[test]
    fn test_swap_tool() {
        let mut session = ConverterSession::default();
        let snapshot = swap_units(&mut session);
        assert_eq!(snapshot.from_unit.key, "cm");
    }
}
