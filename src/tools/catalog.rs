//! Catalog MCP Tools
//!
//! Read-only enumeration of categories, units and quick presets.

use serde::Serialize;

use crate::conversion::{self, base_unit, default_units, parse_category, Category, QuickPreset, Unit};

/// Category entry for list_categories
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_unit: &'static str,
    pub unit_count: usize,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: Category,
    pub base_unit: &'static str,
    pub default_from: &'static str,
    pub default_to: &'static str,
    pub units: &'static [Unit],
}

/// Response for list_presets
#[derive(Debug, Serialize)]
pub struct ListPresetsResponse {
    pub category: Category,
    pub presets: Vec<PresetEntry>,
}

/// Preset with its index, as accepted by apply_preset
#[derive(Debug, Serialize)]
pub struct PresetEntry {
    pub index: usize,
    #[serde(flatten)]
    pub preset: QuickPreset,
}

pub fn list_categories() -> ListCategoriesResponse {
    let categories = conversion::list_categories()
        .iter()
        .map(|c| CategorySummary {
            key: c.as_str(),
            name: c.display_name(),
            icon: c.icon(),
            base_unit: base_unit(*c).key,
            unit_count: c.units().len(),
        })
        .collect();
    ListCategoriesResponse { categories }
}

pub fn list_units(category: &str) -> Result<ListUnitsResponse, String> {
    let category = parse_category(category).map_err(|e| e.to_string())?;
    let (from, to) = default_units(category);
    Ok(ListUnitsResponse {
        category,
        base_unit: base_unit(category).key,
        default_from: from.key,
        default_to: to.key,
        units: conversion::list_units(category),
    })
}

pub fn list_presets(category: &str) -> Result<ListPresetsResponse, String> {
    let category = parse_category(category).map_err(|e| e.to_string())?;
    let presets = conversion::list_presets(category)
        .iter()
        .enumerate()
        .map(|(index, preset)| PresetEntry {
            index,
            preset: *preset,
        })
        .collect();
    Ok(ListPresetsResponse { category, presets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_categories() {
        let response = list_categories();
        assert_eq!(response.categories.len(), 7);
        assert_eq!(response.categories[0].key, "length");
        assert_eq!(response.categories[0].base_unit, "m");
        assert_eq!(response.categories[6].unit_count, 5);
    }

    #[test]
    fn test_list_units() {
        let response = list_units("temperature").unwrap();
        assert_eq!(response.base_unit, "c");
        assert_eq!(response.default_from, "c");
        assert_eq!(response.default_to, "f");
        assert_eq!(response.units.len(), 3);
    }

    #[test]
    fn test_list_units_unknown_category() {
        let err = list_units("time").unwrap_err();
        assert!(err.contains("time"));
    }

    #[test]
    fn test_list_presets_serializes_flat() {
        let response = list_presets("area").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["presets"][1]["index"], 1);
        assert_eq!(json["presets"][1]["from_unit"], "m2");
        assert_eq!(json["presets"][1]["value"], "33");
    }
}
