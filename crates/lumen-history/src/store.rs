// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The append-only history store.
//!
//! Every operation is a whole-log read-modify-write against the injected
//! journal: reload before each read, rewrite after each mutation. There is
//! no concurrent-writer protection; correctness assumes a single logical
//! writer at a time.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use lumen_core::{ExplanationLevel, HistoryRecord, LumenError};

use crate::journal::HistoryJournal;

/// Time source, injected so tests control record ids and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Append-only log of past exchanges over a [`HistoryJournal`].
pub struct HistoryStore {
    journal: Box<dyn HistoryJournal>,
    clock: Box<dyn Clock>,
}

impl HistoryStore {
    pub fn new(journal: Box<dyn HistoryJournal>, clock: Box<dyn Clock>) -> Self {
        Self { journal, clock }
    }

    /// Appends one record and persists the full log.
    ///
    /// Ids are epoch milliseconds clamped to stay strictly above every id
    /// already in the log, so rapid insertion or a stalled clock cannot
    /// produce collisions.
    pub fn append(
        &self,
        prompt: &str,
        level: ExplanationLevel,
        explanation: &str,
    ) -> Result<HistoryRecord, LumenError> {
        let mut records = self.journal.load()?;
        let now = self.clock.now();
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let record = HistoryRecord {
            id: now.timestamp_millis().max(max_id + 1),
            prompt: prompt.to_string(),
            level,
            explanation: explanation.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        records.push(record.clone());
        self.journal.save(&records)?;
        debug!(id = record.id, "history record appended");
        Ok(record)
    }

    /// Looks up a record by id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<HistoryRecord>, LumenError> {
        Ok(self.journal.load()?.into_iter().find(|r| r.id == id))
    }

    /// Deletes the record with `id` if present and reports whether anything
    /// was removed. A missing id is a no-op reporting `false`, not an error.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, LumenError> {
        let mut records = self.journal.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() < before;
        if removed {
            self.journal.save(&records)?;
            debug!(id, "history record deleted");
        }
        Ok(removed)
    }

    /// Current log length.
    pub fn count(&self) -> Result<usize, LumenError> {
        Ok(self.journal.load()?.len())
    }

    /// The full log, newest first.
    ///
    /// The persisted layout is insertion-ordered, but consumers always see
    /// a re-sort by timestamp (id as tie-break).
    pub fn all(&self) -> Result<Vec<HistoryRecord>, LumenError> {
        let mut records = self.journal.load()?;
        records.sort_by_key(|r| std::cmp::Reverse((timestamp_millis(r), r.id)));
        Ok(records)
    }
}

fn timestamp_millis(record: &HistoryRecord) -> i64 {
    DateTime::parse_from_rfc3339(&record.timestamp)
        .map(|t| t.timestamp_millis())
        .unwrap_or(0)
}
