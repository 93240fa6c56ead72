// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-document persistence for the history log.
//!
//! A journal holds the entire log as one JSON array under one location.
//! There are no partial updates: the store reads the whole document before
//! every operation and rewrites it after every mutation.

use std::path::PathBuf;
use std::sync::Mutex;

use lumen_core::{HistoryRecord, LumenError};

/// Whole-log load/save. Implementations are interchangeable so tests can
/// run against memory while production uses a file.
pub trait HistoryJournal: Send + Sync {
    /// Reads the full log. A journal with no persisted state yet yields the
    /// empty log, not an error.
    fn load(&self) -> Result<Vec<HistoryRecord>, LumenError>;

    /// Replaces the persisted log with `records`.
    fn save(&self, records: &[HistoryRecord]) -> Result<(), LumenError>;
}

/// File-backed journal: one JSON array in one file.
#[derive(Debug)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryJournal for FileJournal {
    fn load(&self) -> Result<Vec<HistoryRecord>, LumenError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LumenError::Storage {
                    source: Box::new(e),
                });
            }
        };
        serde_json::from_str(&contents).map_err(|e| LumenError::Storage {
            source: Box::new(e),
        })
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<(), LumenError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| LumenError::Storage {
                source: Box::new(e),
            })?;
        }
        let json = serde_json::to_string(records).map_err(|e| LumenError::Storage {
            source: Box::new(e),
        })?;
        std::fs::write(&self.path, json).map_err(|e| LumenError::Storage {
            source: Box::new(e),
        })
    }
}

/// In-memory journal for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryJournal for MemoryJournal {
    fn load(&self) -> Result<Vec<HistoryRecord>, LumenError> {
        Ok(self.records.lock().expect("journal lock poisoned").clone())
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<(), LumenError> {
        *self.records.lock().expect("journal lock poisoned") = records.to_vec();
        Ok(())
    }
}
