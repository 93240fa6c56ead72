// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response-shape normalization for the completion API.
//!
//! Different deployments of the OpenAI-compatible wire format place the
//! answer text in different spots. The extractor tries each known shape in
//! a fixed order and degrades to a sentinel string when none match, so an
//! unrecognized body never becomes a fault.

use lumen_core::LumenError;
use serde_json::Value;
use tracing::warn;

/// Returned when no recognized shape yields text.
pub const EXTRACTION_SENTINEL: &str = "Could not extract explanation from API response.";

/// Normalizes a completion response body into a single explanation string.
///
/// Shapes attempted in order: `choices[0].message.content`,
/// `choices[0].text`, `choices[0]` as a bare string, `choices[0].content`,
/// then the top-level `text`/`content`/`explanation` fields. The first
/// non-null string wins.
///
/// An explicit `error` object is consulted only after the choices list
/// yields nothing, and ahead of the top-level fields; it maps to
/// [`LumenError::Backend`] carrying the error's `message` (or its
/// serialized form when no message field exists).
pub fn extract_explanation(body: &Value) -> Result<String, LumenError> {
    if let Some(choices) = body.get("choices").and_then(Value::as_array)
        && !choices.is_empty()
    {
        let choice = &choices[0];
        if let Some(text) = choice.pointer("/message/content").and_then(Value::as_str) {
            return Ok(text.to_string());
        }
        if let Some(text) = choice.get("text").and_then(Value::as_str) {
            return Ok(text.to_string());
        }
        if let Some(text) = choice.as_str() {
            return Ok(text.to_string());
        }
        if let Some(text) = choice.get("content").and_then(Value::as_str) {
            return Ok(text.to_string());
        }
    }

    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(LumenError::Backend { message });
    }

    for key in ["text", "content", "explanation"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return Ok(text.to_string());
        }
    }

    warn!("no recognized shape in completion response, using sentinel text");
    Ok(EXTRACTION_SENTINEL.to_string())
}
