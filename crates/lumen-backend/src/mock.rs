// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic mock backend used when no API credential is configured.
//!
//! Replies are level-keyed templates embedding the prompt verbatim and
//! always carry a reasoning segment, so downstream consumers cannot tell
//! the mock and real paths apart by shape. Never performs network I/O.

use async_trait::async_trait;

use lumen_core::{CompletionBackend, ExplanationLevel, LumenError};

/// Mock implementation of [`CompletionBackend`].
#[derive(Debug, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Builds the level-dependent mock explanation for `prompt`.
fn mock_explanation(prompt: &str, level: ExplanationLevel) -> String {
    match level {
        ExplanationLevel::Low => format!(
            "<think>I need to explain {prompt} in very simple terms that a child could understand. \
             I'll use basic language and avoid technical terms. I'll compare it to something familiar \
             like a toy.</think>\n\nHere's a simple explanation of \"{prompt}\": \n\nThink of {prompt} \
             like a toy that helps us understand how things work. It's a basic idea that makes \
             complicated things easier to understand!"
        ),
        ExplanationLevel::High => format!(
            "<think>For a technical explanation of {prompt}, I should include domain-specific \
             terminology and theoretical frameworks. This is for an advanced audience who wants depth \
             and precision.</think>\n\nTechnical explanation of \"{prompt}\": \n\n{prompt} represents \
             a fundamental concept in its domain, characterized by specific properties and behaviors \
             that can be analyzed through various theoretical frameworks. The implications extend to \
             multiple disciplines and applications, with significant research supporting its validity \
             and importance."
        ),
        ExplanationLevel::Medium => format!(
            "<think>I'll provide a step-by-step explanation of {prompt} that's accessible to a \
             general audience. I'll include some structure with numbered points and use analogies to \
             make it clearer.</think>\n\nStep-by-step explanation of \"{prompt}\": \n\n1. First, \
             {prompt} is a concept that helps us understand certain patterns.\n2. It works by \
             connecting related ideas together.\n3. For example, imagine {prompt} as the blueprint \
             for building something new.\n4. When we apply {prompt}, we can solve problems more \
             effectively.\n5. In everyday life, you might see {prompt} when you observe how things \
             naturally organize themselves."
        ),
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn explain(
        &self,
        prompt: &str,
        level: ExplanationLevel,
    ) -> Result<String, LumenError> {
        if prompt.trim().is_empty() {
            return Err(LumenError::MissingPrompt);
        }
        Ok(mock_explanation(prompt.trim(), level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::think;

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let backend = MockBackend::new();
        let err = backend
            .explain("  ", ExplanationLevel::Low)
            .await
            .unwrap_err();
        assert!(matches!(err, LumenError::MissingPrompt));
    }

    #[tokio::test]
    async fn every_level_carries_reasoning_and_embeds_the_prompt() {
        let backend = MockBackend::new();
        for level in [
            ExplanationLevel::Low,
            ExplanationLevel::Medium,
            ExplanationLevel::High,
        ] {
            let raw = backend.explain("photosynthesis", level).await.unwrap();
            let parsed = think::split(&raw);
            let reasoning = parsed.reasoning.expect("mock reply must carry reasoning");
            assert!(!reasoning.is_empty());
            assert!(reasoning.contains("photosynthesis"));
            assert!(parsed.answer.contains("photosynthesis"));
        }
    }

    #[tokio::test]
    async fn replies_are_deterministic() {
        let backend = MockBackend::new();
        let a = backend
            .explain("entropy", ExplanationLevel::Medium)
            .await
            .unwrap();
        let b = backend
            .explain("entropy", ExplanationLevel::Medium)
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn levels_produce_distinct_replies() {
        let backend = MockBackend::new();
        let low = backend.explain("entropy", ExplanationLevel::Low).await.unwrap();
        let high = backend.explain("entropy", ExplanationLevel::High).await.unwrap();
        assert_ne!(low, high);
    }
}
