// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gallery projection of the history log.
//!
//! Pure display shaping: each record becomes an entry keyed by its id, with
//! the raw explanation truncated to a fixed preview budget. Ordering comes
//! from `HistoryStore::all()` (newest first) and is preserved here.

use serde::Serialize;

use lumen_core::{ExplanationLevel, HistoryRecord};

/// Character budget for explanation previews.
pub const PREVIEW_BUDGET: usize = 150;

/// One gallery card. `id` keys the open-in-chat and delete affordances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryEntry {
    pub id: i64,
    pub prompt: String,
    pub level: ExplanationLevel,
    /// Human-readable badge text for the level.
    pub level_label: &'static str,
    pub preview: String,
    pub timestamp: String,
}

/// Badge text shown next to each entry.
pub fn level_label(level: ExplanationLevel) -> &'static str {
    match level {
        ExplanationLevel::Low => "Simple",
        ExplanationLevel::Medium => "Step-by-step",
        ExplanationLevel::High => "Technical",
    }
}

/// Projects records (already newest-first) into gallery entries.
pub fn render_gallery(records: &[HistoryRecord]) -> Vec<GalleryEntry> {
    records
        .iter()
        .map(|record| GalleryEntry {
            id: record.id,
            prompt: record.prompt.clone(),
            level: record.level,
            level_label: level_label(record.level),
            preview: preview_of(&record.explanation),
            timestamp: record.timestamp.clone(),
        })
        .collect()
}

/// Truncates to [`PREVIEW_BUDGET`] characters with an ellipsis marker.
///
/// Counts characters rather than bytes so multi-byte text never splits.
fn preview_of(explanation: &str) -> String {
    let mut chars = explanation.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_BUDGET).collect();
    if chars.next().is_some() {
        preview.push_str("...");
    }
    preview
}
