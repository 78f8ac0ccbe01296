//! Unit types and conversion constants
//!
//! Defines the measurement categories, the units in each category and the
//! transform each unit applies against its category's base unit.

use serde::{Deserialize, Serialize};

/// Measurement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
    Data,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Data => "data",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Some(Category::Length),
            "weight" | "mass" => Some(Category::Weight),
            "temperature" | "temp" => Some(Category::Temperature),
            "area" => Some(Category::Area),
            "volume" => Some(Category::Volume),
            "speed" | "velocity" => Some(Category::Speed),
            "data" | "data_size" => Some(Category::Data),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Data => "Data",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Length => "📏",
            Category::Weight => "⚖️",
            Category::Temperature => "🌡️",
            Category::Area => "📐",
            Category::Volume => "🧪",
            Category::Speed => "🚀",
            Category::Data => "💾",
        }
    }

    /// Units of this category in catalog order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Area => AREA_UNITS,
            Category::Volume => VOLUME_UNITS,
            Category::Speed => SPEED_UNITS,
            Category::Data => DATA_UNITS,
        }
    }
}

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// The base unit itself
    Identity,
    /// `base = value * factor`
    Multiply(f64),
    /// `base = value / divisor`
    Divide(f64),
    /// `base = (value - offset) * numerator / denominator`
    Affine {
        offset: f64,
        numerator: f64,
        denominator: f64,
    },
}

/// A unit within a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Identifier, unique within the category (e.g., "cm")
    pub key: &'static str,
    /// Human readable name (e.g., "Centimeter")
    pub name: &'static str,
    /// Display symbol (e.g., "cm", "°C")
    pub symbol: &'static str,
    #[serde(skip)]
    pub transform: Transform,
}

impl Unit {
    const fn new(
        key: &'static str,
        name: &'static str,
        symbol: &'static str,
        transform: Transform,
    ) -> Self {
        Self {
            key,
            name,
            symbol,
            transform,
        }
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.transform {
            Transform::Identity => value,
            Transform::Multiply(factor) => value * factor,
            Transform::Divide(divisor) => value / divisor,
            Transform::Affine {
                offset,
                numerator,
                denominator,
            } => (value - offset) * numerator / denominator,
        }
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.transform {
            Transform::Identity => value,
            Transform::Multiply(factor) => value / factor,
            Transform::Divide(divisor) => value * divisor,
            Transform::Affine {
                offset,
                numerator,
                denominator,
            } => value * denominator / numerator + offset,
        }
    }

    /// Whether this unit is its category's base unit
    pub fn is_base(&self) -> bool {
        self.transform == Transform::Identity
    }
}

// ============================================================================
// Length (base: meter)
// ============================================================================

/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FOOT: f64 = 0.3048;
/// Meters per yard
pub const M_PER_YARD: f64 = 0.9144;
/// Meters per statute mile
pub const M_PER_MILE: f64 = 1609.344;
/// Meters per ja (Korean traditional foot)
pub const M_PER_JA: f64 = 0.30303;
/// Meters per chi (one tenth of a ja)
pub const M_PER_CHI: f64 = 0.030303;

static LENGTH_UNITS: &[Unit] = &[
    Unit::new("mm", "Millimeter", "mm", Transform::Divide(1000.0)),
    Unit::new("cm", "Centimeter", "cm", Transform::Divide(100.0)),
    Unit::new("m", "Meter", "m", Transform::Identity),
    Unit::new("km", "Kilometer", "km", Transform::Multiply(1000.0)),
    Unit::new("in", "Inch", "in", Transform::Multiply(M_PER_INCH)),
    Unit::new("ft", "Foot", "ft", Transform::Multiply(M_PER_FOOT)),
    Unit::new("yd", "Yard", "yd", Transform::Multiply(M_PER_YARD)),
    Unit::new("mile", "Mile", "mi", Transform::Multiply(M_PER_MILE)),
    Unit::new("ja", "Ja", "자", Transform::Multiply(M_PER_JA)),
    Unit::new("chi", "Chi", "치", Transform::Multiply(M_PER_CHI)),
];

// ============================================================================
// Weight (base: kilogram)
// ============================================================================

/// Kilograms per pound (exact, international avoirdupois)
pub const KG_PER_LB: f64 = 0.45359237;
/// Kilograms per ounce
pub const KG_PER_OZ: f64 = 0.0283495;
/// Kilograms per geun
pub const KG_PER_GEUN: f64 = 0.6;
/// Kilograms per don
pub const KG_PER_DON: f64 = 0.00375;

static WEIGHT_UNITS: &[Unit] = &[
    Unit::new("mg", "Milligram", "mg", Transform::Divide(1_000_000.0)),
    Unit::new("g", "Gram", "g", Transform::Divide(1000.0)),
    Unit::new("kg", "Kilogram", "kg", Transform::Identity),
    Unit::new("t", "Tonne", "t", Transform::Multiply(1000.0)),
    Unit::new("lb", "Pound", "lb", Transform::Multiply(KG_PER_LB)),
    Unit::new("oz", "Ounce", "oz", Transform::Multiply(KG_PER_OZ)),
    Unit::new("geun", "Geun", "근", Transform::Multiply(KG_PER_GEUN)),
    Unit::new("don", "Don", "돈", Transform::Multiply(KG_PER_DON)),
];

// ============================================================================
// Temperature (base: Celsius)
// ============================================================================

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

static TEMPERATURE_UNITS: &[Unit] = &[
    Unit::new("c", "Celsius", "°C", Transform::Identity),
    Unit::new(
        "f",
        "Fahrenheit",
        "°F",
        Transform::Affine {
            offset: 32.0,
            numerator: 5.0,
            denominator: 9.0,
        },
    ),
    Unit::new(
        "k",
        "Kelvin",
        "K",
        Transform::Affine {
            offset: KELVIN_OFFSET,
            numerator: 1.0,
            denominator: 1.0,
        },
    ),
];

// ============================================================================
// Area (base: square meter)
// ============================================================================

/// Square meters per pyeong
pub const M2_PER_PYEONG: f64 = 3.305785;
/// Square meters per acre
pub const M2_PER_ACRE: f64 = 4046.8564;

static AREA_UNITS: &[Unit] = &[
    Unit::new("cm2", "Square centimeter", "cm²", Transform::Divide(10_000.0)),
    Unit::new("m2", "Square meter", "m²", Transform::Identity),
    Unit::new("km2", "Square kilometer", "km²", Transform::Multiply(1_000_000.0)),
    Unit::new("pyeong", "Pyeong", "평", Transform::Multiply(M2_PER_PYEONG)),
    Unit::new("acre", "Acre", "acre", Transform::Multiply(M2_PER_ACRE)),
    Unit::new("ha", "Hectare", "ha", Transform::Multiply(10_000.0)),
];

// ============================================================================
// Volume (base: liter)
// ============================================================================

/// Liters per US gallon
pub const L_PER_GALLON: f64 = 3.78541;

static VOLUME_UNITS: &[Unit] = &[
    Unit::new("ml", "Milliliter", "mL", Transform::Divide(1000.0)),
    Unit::new("l", "Liter", "L", Transform::Identity),
    Unit::new("cc", "Cubic centimeter", "cc", Transform::Divide(1000.0)),
    Unit::new("gal", "Gallon (US)", "gal", Transform::Multiply(L_PER_GALLON)),
    Unit::new("m3", "Cubic meter", "m³", Transform::Multiply(1000.0)),
];

// ============================================================================
// Speed (base: meters per second)
// ============================================================================

/// km/h per m/s
pub const KMH_PER_MPS: f64 = 3.6;
/// m/s per mph
pub const MPS_PER_MPH: f64 = 0.44704;
/// m/s per knot
pub const MPS_PER_KNOT: f64 = 0.514444;

static SPEED_UNITS: &[Unit] = &[
    Unit::new("mps", "Meters per second", "m/s", Transform::Identity),
    Unit::new("kmh", "Kilometers per hour", "km/h", Transform::Divide(KMH_PER_MPS)),
    Unit::new("mph", "Miles per hour", "mph", Transform::Multiply(MPS_PER_MPH)),
    Unit::new("knot", "Knot", "kn", Transform::Multiply(MPS_PER_KNOT)),
];

// ============================================================================
// Data (base: byte, binary multiples)
// ============================================================================

pub const BYTES_PER_KB: f64 = 1024.0;
pub const BYTES_PER_MB: f64 = BYTES_PER_KB * 1024.0;
pub const BYTES_PER_GB: f64 = BYTES_PER_MB * 1024.0;
pub const BYTES_PER_TB: f64 = BYTES_PER_GB * 1024.0;

static DATA_UNITS: &[Unit] = &[
    Unit::new("b", "Byte", "B", Transform::Identity),
    Unit::new("kb", "Kilobyte", "KB", Transform::Multiply(BYTES_PER_KB)),
    Unit::new("mb", "Megabyte", "MB", Transform::Multiply(BYTES_PER_MB)),
    Unit::new("gb", "Gigabyte", "GB", Transform::Multiply(BYTES_PER_GB)),
    Unit::new("tb", "Terabyte", "TB", Transform::Multiply(BYTES_PER_TB)),
];
