//! Conversion history model
//!
//! Saved conversions held in a bounded, most-recent-first list that lives as
//! long as the process.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::conversion::Category;

/// Default number of records kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A saved conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub id: String,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    /// Input text as entered
    pub from_value: String,
    /// Formatted result
    pub to_value: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Data needed to create a history record
#[derive(Debug, Clone)]
pub struct HistoryRecordCreate {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
    pub from_value: String,
    pub to_value: String,
}

impl HistoryRecord {
    /// Build a record stamped with `now`
    ///
    /// `seq` disambiguates records created within the same millisecond.
    pub fn new(data: HistoryRecordCreate, now: DateTime<Utc>, seq: u64) -> Self {
        let timestamp = now.timestamp_millis();
        let id = if seq == 0 {
            timestamp.to_string()
        } else {
            format!("{}-{}", timestamp, seq)
        };
        Self {
            id,
            category: data.category,
            from_unit: data.from_unit,
            to_unit: data.to_unit,
            from_value: data.from_value,
            to_value: data.to_value,
            timestamp,
        }
    }

    /// Short display time, "M/D H:MM" in UTC
    pub fn display_time(&self) -> String {
        match DateTime::<Utc>::from_timestamp_millis(self.timestamp) {
            Some(dt) => dt.format("%-m/%-d %-H:%M").to_string(),
            None => String::new(),
        }
    }
}

/// Bounded most-recent-first list of records
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
    last_timestamp: i64,
    same_ms_count: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history; a capacity of 0 is treated as 1
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            last_timestamp: i64::MIN,
            same_ms_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a record stamped with `now` and put it at the front, evicting
    /// the oldest record when full
    pub fn record(&mut self, data: HistoryRecordCreate, now: DateTime<Utc>) -> HistoryRecord {
        let ms = now.timestamp_millis();
        if ms == self.last_timestamp {
            self.same_ms_count += 1;
        } else {
            self.last_timestamp = ms;
            self.same_ms_count = 0;
        }
        let record = HistoryRecord::new(data, now, self.same_ms_count);
        self.push(record.clone());
        record
    }

    /// Put a record at the front, evicting the oldest when full
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_front(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_back() {
                tracing::debug!(id = %evicted.id, "evicted history record");
            }
        }
    }

    /// Records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn to_vec(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }
}
