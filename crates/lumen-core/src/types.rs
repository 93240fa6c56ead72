// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Lumen workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Requested explanation depth/audience.
///
/// Wire and storage form is lowercase (`"low"`, `"medium"`, `"high"`).
/// Anything else normalizes to [`ExplanationLevel::Medium`] via
/// [`ExplanationLevel::from_param`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExplanationLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ExplanationLevel {
    /// Total conversion from an optional request parameter.
    ///
    /// Missing, empty, or unrecognized values map to `Medium`.
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|s| s.parse().ok())
            .unwrap_or(ExplanationLevel::Medium)
    }
}

/// A fully-formed request to the completion backend.
///
/// `user_prompt` is non-empty; the adapter rejects empty prompts before
/// constructing one of these.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

/// An explanation separated into its optional reasoning preamble and the
/// answer proper.
///
/// `answer` is never empty when the input to the splitter was non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExplanation {
    pub reasoning: Option<String>,
    pub answer: String,
}

/// One persisted question/answer exchange.
///
/// `explanation` is stored raw, reasoning sentinels included, so the
/// splitter can recover the preamble on display. Records are immutable
/// once created; the only mutation the log supports is whole-record
/// deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Strictly-increasing, time-derived identifier.
    pub id: i64,
    pub prompt: String,
    pub level: ExplanationLevel,
    pub explanation: String,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}
