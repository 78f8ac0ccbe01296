//! Data models
//!
//! Session-lifetime records produced by the converter.

mod history;

pub use history::{History, HistoryRecord, HistoryRecordCreate, DEFAULT_HISTORY_CAPACITY};
