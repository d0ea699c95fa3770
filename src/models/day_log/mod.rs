//! Day-log data model: the static work-journal entries shown on the
//! dashboard and the per-day expand/collapse state.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// The day-log data compiled into the binary. Parsed once at startup.
pub const EMBEDDED_DAY_LOGS: &str = include_str!("../../../data/day_logs.json");

/// One day's journal entry. Section order inside each vector is display
/// order; sections missing from the data file deserialize as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayLog {
    pub day: String,
    #[serde(default)]
    pub planned: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DayLogError {
    #[error("failed to parse day log data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full set of day logs, in file order (oldest first). Immutable after
/// load; the dashboard renders it newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLogBook {
    entries: Vec<DayLog>,
}

impl DayLogBook {
    /// Parse a JSON array of day logs. This is the only fatal error path in
    /// the application: without the data there is nothing to show.
    pub fn from_json(data: &str) -> Result<Self, DayLogError> {
        let entries: Vec<DayLog> = serde_json::from_str(data)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DayLog] {
        &self.entries
    }

    /// Display order: most recently defined day first.
    pub fn newest_first(&self) -> impl Iterator<Item = &DayLog> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which day cards are currently expanded. Mutated only through
/// [`ExpandedState::toggled`], which flips exactly one key per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedState {
    days: HashMap<String, bool>,
}

impl ExpandedState {
    /// Every known day starts collapsed.
    pub fn for_book(book: &DayLogBook) -> Self {
        let days = book
            .entries()
            .iter()
            .map(|log| (log.day.clone(), false))
            .collect();
        Self { days }
    }

    pub fn is_expanded(&self, day: &str) -> bool {
        self.days.get(day).copied().unwrap_or(false)
    }

    /// Returns a copy with `day` flipped and every other key untouched.
    pub fn toggled(&self, day: &str) -> Self {
        let mut days = self.days.clone();
        days.entry(day.to_string())
            .and_modify(|expanded| *expanded = !*expanded)
            .or_insert(true);
        Self { days }
    }
}
