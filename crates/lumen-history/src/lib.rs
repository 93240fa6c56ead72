// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! History log persistence and gallery projection for Lumen.
//!
//! The store keeps the whole log as one JSON document behind a
//! [`HistoryJournal`], reloading before every read and rewriting after
//! every mutation. The gallery module shapes records for display.

pub mod gallery;
pub mod journal;
pub mod store;

pub use gallery::{GalleryEntry, PREVIEW_BUDGET, render_gallery};
pub use journal::{FileJournal, HistoryJournal, MemoryJournal};
pub use store::{Clock, HistoryStore, SystemClock};
