//! Converter session
//!
//! Interaction state of a single converter screen: the selected category and
//! units, the raw input text, and the saved history. The conversion itself is
//! always delegated to the stateless engine in [`crate::conversion`].

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::ads::AdPresenter;
use crate::conversion::{
    convert_between, copy_text, default_units, find_unit, format_result, list_presets,
    parse_input, Category, ConversionError, QuickPreset, Unit,
};
use crate::models::{History, HistoryRecord, HistoryRecordCreate};

/// Messages shown next to a fresh result, rotated on each change
pub const FRIENDLY_MESSAGES: [&str; 4] = [
    "Converted!",
    "Calculated precisely",
    "No more guessing, right?",
    "Hope this helps!",
];

/// Session error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Enter a value to convert first")]
    NothingToSave,

    #[error("No preset at index {index} for {category}")]
    PresetNotFound { category: &'static str, index: usize },

    #[error("History record not found: {0}")]
    RecordNotFound(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// What happened to a save request
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The ad flow finished and the record is in the history
    Saved(HistoryRecord),
    /// An ad is still showing; the record is added once it is dismissed
    Pending,
}

/// Serializable view of the session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub category: Category,
    pub from_unit: Unit,
    pub to_unit: Unit,
    pub input: String,
    pub result: Option<String>,
    pub raw_result: Option<f64>,
    pub copy_text: Option<String>,
    pub message: Option<&'static str>,
    pub presets: &'static [QuickPreset],
    pub history_count: usize,
}

/// Headless converter state
#[derive(Debug)]
pub struct ConverterSession {
    category: Category,
    from: &'static Unit,
    to: &'static Unit,
    input: String,
    history: Arc<Mutex<History>>,
    changes: usize,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(History::default())
    }
}

impl ConverterSession {
    /// Start on the first category with its default unit pair and input "1"
    pub fn new(history: History) -> Self {
        let category = Category::ALL[0];
        let (from, to) = default_units(category);
        Self {
            category,
            from,
            to,
            input: "1".to_string(),
            history: Arc::new(Mutex::new(history)),
            changes: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Converted value, or `None` while the input is not a number
    pub fn result(&self) -> Option<f64> {
        parse_input(&self.input)
            .ok()
            .map(|value| convert_between(self.from, self.to, value))
    }

    pub fn formatted_result(&self) -> Option<String> {
        self.result().map(format_result)
    }

    /// "{input} {from} = {result} {to}", when there is a result
    pub fn copy_text(&self) -> Option<String> {
        self.formatted_result()
            .map(|result| copy_text(&self.input, self.from, &result, self.to))
    }

    pub fn message(&self) -> Option<&'static str> {
        self.result()?;
        Some(FRIENDLY_MESSAGES[self.changes % FRIENDLY_MESSAGES.len()])
    }

    /// Switch category and reset the unit selection to its defaults
    pub fn select_category(&mut self, category: Category) {
        let (from, to) = default_units(category);
        self.category = category;
        self.from = from;
        self.to = to;
        self.touch();
        tracing::info!(category = category.as_str(), "category selected");
    }

    /// Change the source and/or target unit within the current category
    pub fn select_units(&mut self, from_key: Option<&str>, to_key: Option<&str>) -> SessionResult<()> {
        let from = match from_key {
            Some(key) => find_unit(self.category, key)?,
            None => self.from,
        };
        let to = match to_key {
            Some(key) => find_unit(self.category, key)?,
            None => self.to,
        };
        self.from = from;
        self.to = to;
        self.touch();
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.touch();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.touch();
    }

    /// Apply the preset at `index` of the current category
    pub fn apply_preset(&mut self, index: usize) -> SessionResult<QuickPreset> {
        let preset = *list_presets(self.category)
            .get(index)
            .ok_or(SessionError::PresetNotFound {
                category: self.category.as_str(),
                index,
            })?;
        let from = find_unit(self.category, preset.from_unit)?;
        let to = find_unit(self.category, preset.to_unit)?;
        self.from = from;
        self.to = to;
        self.input = preset.value.to_string();
        self.touch();
        Ok(preset)
    }

    /// Save the current conversion after the ad flow completes
    pub fn save_record(&self, presenter: &dyn AdPresenter) -> SessionResult<SaveOutcome> {
        let to_value = match self.formatted_result() {
            Some(result) if !self.input.is_empty() => result,
            _ => {
                tracing::warn!(input = %self.input, "save rejected, no valid result");
                return Err(SessionError::NothingToSave);
            }
        };

        let data = HistoryRecordCreate {
            category: self.category,
            from_unit: self.from.key.to_string(),
            to_unit: self.to.key.to_string(),
            from_value: self.input.clone(),
            to_value,
        };

        let saved: Arc<Mutex<Option<HistoryRecord>>> = Arc::new(Mutex::new(None));
        let history = Arc::clone(&self.history);
        let slot = Arc::clone(&saved);
        presenter.present_then_continue(Box::new(move || {
            let record = history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .record(data, Utc::now());
            tracing::info!(id = %record.id, category = record.category.as_str(), "conversion saved");
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(record);
        }));

        let outcome = saved.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(match outcome {
            Some(record) => SaveOutcome::Saved(record),
            None => SaveOutcome::Pending,
        })
    }

    /// Saved records, newest first
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Restore category, units and input from a saved record
    pub fn apply_record(&mut self, id: &str) -> SessionResult<HistoryRecord> {
        let record = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::RecordNotFound(id.to_string()))?;

        let from = find_unit(record.category, &record.from_unit)?;
        let to = find_unit(record.category, &record.to_unit)?;
        self.category = record.category;
        self.from = from;
        self.to = to;
        self.input = record.from_value.clone();
        self.touch();
        Ok(record)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            category: self.category,
            from_unit: *self.from,
            to_unit: *self.to,
            input: self.input.clone(),
            result: self.formatted_result(),
            raw_result: self.result(),
            copy_text: self.copy_text(),
            message: self.message(),
            presets: list_presets(self.category),
            history_count: self.history_len(),
        }
    }

    fn touch(&mut self) {
        self.changes = self.changes.wrapping_add(1);
    }
}
