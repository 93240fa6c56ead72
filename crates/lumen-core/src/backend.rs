// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The completion-backend capability.
//!
//! Mock and real backends are separate implementations of one trait,
//! selected by a factory at startup. Callers never see which one they hold.

use async_trait::async_trait;

use crate::error::LumenError;
use crate::types::ExplanationLevel;

/// A backend able to turn a (prompt, level) pair into a raw explanation
/// string carrying a `<think>...</think>` reasoning segment.
///
/// Contract:
/// - an empty prompt is rejected with [`LumenError::MissingPrompt`] before
///   any network activity;
/// - every `Ok` explanation carries a reasoning segment, synthesized when
///   the upstream response lacks one.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Short backend name for logging.
    fn name(&self) -> &str;

    /// Produces a raw explanation for `prompt` at the requested `level`.
    async fn explain(
        &self,
        prompt: &str,
        level: ExplanationLevel,
    ) -> Result<String, LumenError>;
}
