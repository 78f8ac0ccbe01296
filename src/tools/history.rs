//! History MCP Tools
//!
//! Saving conversions (behind the ad gate), listing and re-applying them.

use serde::Serialize;

use crate::ads::AdPresenter;
use crate::models::HistoryRecord;
use crate::session::{ConverterSession, SaveOutcome, SessionSnapshot};

/// Response for save_record
#[derive(Debug, Serialize)]
pub struct SaveRecordResponse {
    pub saved: bool,
    pub message: String,
    pub record: Option<HistoryRecord>,
}

/// History entry with a short display time
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: HistoryRecord,
    pub time: String,
}

/// Response for list_history
#[derive(Debug, Serialize)]
pub struct ListHistoryResponse {
    pub records: Vec<HistoryEntry>,
    pub total: usize,
}

/// Response for apply_record
#[derive(Debug, Serialize)]
pub struct ApplyRecordResponse {
    pub record: HistoryRecord,
    pub session: SessionSnapshot,
}

pub fn save_record(session: &ConverterSession, presenter: &dyn AdPresenter) -> Result<SaveRecordResponse, String> {
    let outcome = session.save_record(presenter).map_err(|e| e.to_string())?;
    Ok(match outcome {
        SaveOutcome::Saved(record) => SaveRecordResponse {
            saved: true,
            message: "Conversion saved to history".to_string(),
            record: Some(record),
        },
        SaveOutcome::Pending => SaveRecordResponse {
            saved: false,
            message: "Ad is showing; the conversion is saved when it is dismissed".to_string(),
            record: None,
        },
    })
}

pub fn list_history(session: &ConverterSession) -> ListHistoryResponse {
    let records: Vec<HistoryEntry> = session
        .history()
        .into_iter()
        .map(|record| HistoryEntry {
            time: record.display_time(),
            record,
        })
        .collect();
    let total = records.len();
    ListHistoryResponse { records, total }
}

pub fn apply_record(session: &mut ConverterSession, id: &str) -> Result<ApplyRecordResponse, String> {
    let record = session
        .apply_record(id)
        .map_err(|e| format!("Failed to apply record: {}", e))?;
    Ok(ApplyRecordResponse {
        record,
        session: session.snapshot(),
    })
}
