// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thinking/answer splitter.
//!
//! Backends may emit a reasoning preamble delimited by a literal
//! `<think>...</think>` pair ahead of the answer text. This module extracts
//! that preamble with an explicit scanner rather than a regex; any malformed
//! or unterminated layout yields no extraction at all, and the whole input
//! becomes the answer.

use crate::types::ParsedExplanation;

/// Opening sentinel of a reasoning segment.
pub const THINK_OPEN: &str = "<think>";

/// Closing sentinel of a reasoning segment.
pub const THINK_CLOSE: &str = "</think>";

/// Whether `raw` already carries a reasoning sentinel.
pub fn contains_reasoning(raw: &str) -> bool {
    raw.contains(THINK_OPEN)
}

/// Splits `raw` into an optional reasoning preamble and the answer text.
///
/// A well-formed segment is the opening sentinel at the start of the
/// (whitespace-trimmed) input, reasoning text, the closing sentinel, then
/// the answer. Everything else (no sentinels, an unterminated opener, an
/// empty remainder, or a remainder that begins with another opener) is
/// treated as having no reasoning segment. The answer is always non-empty
/// when `raw` is non-empty, and `split(split(raw).answer)` never yields
/// reasoning.
pub fn split(raw: &str) -> ParsedExplanation {
    let trimmed = raw.trim();

    let no_extraction = || ParsedExplanation {
        reasoning: None,
        answer: trimmed.to_string(),
    };

    let Some(rest) = trimmed.strip_prefix(THINK_OPEN) else {
        return no_extraction();
    };
    let Some(close_at) = rest.find(THINK_CLOSE) else {
        return no_extraction();
    };

    let reasoning = rest[..close_at].trim();
    let answer = rest[close_at + THINK_CLOSE.len()..].trim();

    // A reasoning-only input, or one whose remainder opens another segment,
    // would break the non-empty-answer invariant or idempotence.
    if answer.is_empty() || answer.starts_with(THINK_OPEN) {
        return no_extraction();
    }

    ParsedExplanation {
        reasoning: (!reasoning.is_empty()).then(|| reasoning.to_string()),
        answer: answer.to_string(),
    }
}
