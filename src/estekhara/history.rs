use crate::content::AyahEntry;
use crate::storage::{keys, LocalStore};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most records kept; the oldest are dropped first.
pub const HISTORY_CAP: usize = 10;

/// One completed Estekhara run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Wall-clock time of the run (serialized as an ISO timestamp).
    pub date: DateTime<Utc>,
    pub question: String,
    pub ayah: AyahEntry,
    /// Same instant in epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryRecord {
    pub fn new(question: &str, ayah: AyahEntry, at: DateTime<Utc>) -> Self {
        Self {
            date: at,
            question: question.to_string(),
            ayah,
            timestamp: at.timestamp_millis(),
        }
    }
}

/// Bounded newest-first log of past runs, persisted as a JSON blob in
/// the local store.
#[derive(Debug, Clone, Default)]
pub struct EstekharaHistory {
    records: Vec<HistoryRecord>,
}

impl EstekharaHistory {
    /// Load from the store. A missing or unreadable blob yields an empty
    /// history.
    pub fn load(store: &LocalStore) -> Self {
        let records = store
            .get(keys::ESTEKHARA_HISTORY)
            .and_then(|blob| match serde_json::from_str(blob) {
                Ok(records) => Some(records),
                Err(err) => {
                    tracing::warn!("discarding unreadable history blob: {err}");
                    None
                }
            })
            .unwrap_or_default();

        Self { records }
    }

    /// Write the current records back to the store.
    pub fn save(&self, store: &mut LocalStore) -> Result<()> {
        let blob = serde_json::to_string(&self.records).context("Failed to serialize history")?;
        store.set(keys::ESTEKHARA_HISTORY, blob)
    }

    /// Insert at the front and drop anything past the cap.
    pub fn prepend(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAP);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
