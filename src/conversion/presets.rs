//! Quick presets
//!
//! Frequently used conversions offered as one-tap shortcuts per category.

use serde::Serialize;

use super::units::Category;

/// A predefined conversion shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickPreset {
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    /// Literal input value, kept as text the way the user would type it
    pub value: &'static str,
    pub label: &'static str,
}

const fn preset(
    from_unit: &'static str,
    to_unit: &'static str,
    value: &'static str,
    label: &'static str,
) -> QuickPreset {
    QuickPreset {
        from_unit,
        to_unit,
        value,
        label,
    }
}

static LENGTH_PRESETS: &[QuickPreset] = &[
    preset("in", "cm", "1", "1 in → cm"),
    preset("ft", "m", "1", "1 ft → m"),
    preset("mile", "km", "1", "1 mile → km"),
];

static WEIGHT_PRESETS: &[QuickPreset] = &[
    preset("lb", "kg", "1", "1 lb → kg"),
    preset("oz", "g", "1", "1 oz → g"),
    preset("geun", "kg", "1", "1 geun → kg"),
];

static TEMPERATURE_PRESETS: &[QuickPreset] = &[
    preset("f", "c", "98.6", "Body temp (°F) → °C"),
    preset("c", "f", "0", "Freezing point → °F"),
];

static AREA_PRESETS: &[QuickPreset] = &[
    preset("pyeong", "m2", "1", "1 pyeong → m²"),
    preset("m2", "pyeong", "33", "33 m² → pyeong"),
];

static VOLUME_PRESETS: &[QuickPreset] = &[
    preset("gal", "l", "1", "1 gal → L"),
    preset("l", "ml", "1", "1 L → mL"),
];

static SPEED_PRESETS: &[QuickPreset] = &[
    preset("kmh", "mph", "100", "100 km/h → mph"),
    preset("mps", "kmh", "1", "1 m/s → km/h"),
];

static DATA_PRESETS: &[QuickPreset] = &[
    preset("gb", "mb", "1", "1 GB → MB"),
    preset("mb", "kb", "1", "1 MB → KB"),
];

/// Presets for a category in display order
pub fn presets_for(category: Category) -> &'static [QuickPreset] {
    match category {
        Category::Length => LENGTH_PRESETS,
        Category::Weight => WEIGHT_PRESETS,
        Category::Temperature => TEMPERATURE_PRESETS,
        Category::Area => AREA_PRESETS,
        Category::Volume => VOLUME_PRESETS,
        Category::Speed => SPEED_PRESETS,
        Category::Data => DATA_PRESETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_resolves_within_its_category() {
        for category in Category::ALL {
            let units = category.units();
            for p in presets_for(category) {
                assert!(
                    units.iter().any(|u| u.key == p.from_unit),
                    "{}: unknown from unit {}",
                    category.as_str(),
                    p.from_unit
                );
                assert!(
                    units.iter().any(|u| u.key == p.to_unit),
                    "{}: unknown to unit {}",
                    category.as_str(),
                    p.to_unit
                );
            }
        }
    }

    #[test]
    fn test_every_preset_value_is_numeric() {
        for category in Category::ALL {
            for p in presets_for(category) {
                assert!(p.value.parse::<f64>().is_ok(), "bad preset value {}", p.value);
            }
        }
    }

    #[test]
    fn test_every_category_has_presets() {
        for category in Category::ALL {
            assert!(!presets_for(category).is_empty());
        }
    }
}
