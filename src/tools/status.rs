//! Converter Status Tool
//!
//! Provides runtime status information about the converter service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::Category;

/// Usage instructions for AI assistants
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# Unit Converter Instructions

## Categories

length, weight, temperature, area, volume, speed, data.
Call `list_units` with a category to see its unit keys. Unit keys only
exist inside their own category ("cm" is a length, not an area).

## One-off conversions

Use `convert` with `category`, `from_unit`, `to_unit` and `value`.
`value` is text: leading whitespace is ignored and the leading number is
used ("12.5kg" reads as 12.5). Empty or non-numeric text is rejected.

Results are formatted with at most 6 decimals and `,` thousands grouping.
`result` carries the unrounded number.

## Working session

1. `select_category` resets the units to the category defaults
2. `select_units` / `swap_units` change the pair
3. `set_input` sets the value, or `apply_preset` with an index from `list_presets`
4. `copy_result` returns "1 in = 2.54 cm" style text
5. `save_record` stores the conversion (at most the 10 latest are kept)
6. `list_history` / `apply_record` bring a saved conversion back

## Notes

- Data units are binary: 1 KB = 1024 B
- Temperature is the only category with offsets (°F, K)
- Korean traditional units: ja/chi (length), geun/don (weight), pyeong (area)
"#;

/// Runtime status of the converter service
#[derive(Debug, Clone, Serialize)]
pub struct ConverterStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub category_count: usize,
    pub unit_count: usize,
    pub history_capacity: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    history_capacity: usize,
}

impl StatusTracker {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            start_time: Instant::now(),
            history_capacity,
        }
    }

    pub fn get_status(&self) -> ConverterStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConverterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            category_count: Category::ALL.len(),
            unit_count: Category::ALL.iter().map(|c| c.units().len()).sum(),
            history_capacity: self.history_capacity,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
