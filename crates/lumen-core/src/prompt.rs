// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System-instruction table keyed by explanation level.

use crate::types::ExplanationLevel;

const LOW_PROMPT: &str = "You are a friendly explainer. Give a short, simple explanation for absolute beginners or children. Avoid jargon.";

const MEDIUM_PROMPT: &str = "You are a helpful science and technology tutor. Give a clear, step-by-step explanation with examples and analogies for a student.";

const HIGH_PROMPT: &str = "You are a subject matter expert. Give an in-depth, technical explanation suitable for advanced learners or professionals, with details and references.";

/// Returns the system instruction for the given level.
///
/// Deterministic and total. Unrecognized inputs never reach this function:
/// [`ExplanationLevel::from_param`] already folds them into `Medium`.
pub fn system_prompt_for(level: ExplanationLevel) -> &'static str {
    match level {
        ExplanationLevel::Low => LOW_PROMPT,
        ExplanationLevel::Medium => MEDIUM_PROMPT,
        ExplanationLevel::High => HIGH_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_non_empty_instruction() {
        for level in [
            ExplanationLevel::Low,
            ExplanationLevel::Medium,
            ExplanationLevel::High,
        ] {
            assert!(!system_prompt_for(level).is_empty());
        }
    }

    #[test]
    fn unrecognized_levels_get_the_medium_instruction() {
        for param in [Some("anything-else"), Some(""), None] {
            let level = ExplanationLevel::from_param(param);
            assert_eq!(
                system_prompt_for(level),
                system_prompt_for(ExplanationLevel::Medium)
            );
        }
    }

    #[test]
    fn instructions_are_distinct_per_level() {
        assert_ne!(
            system_prompt_for(ExplanationLevel::Low),
            system_prompt_for(ExplanationLevel::High)
        );
        assert_ne!(
            system_prompt_for(ExplanationLevel::Low),
            system_prompt_for(ExplanationLevel::Medium)
        );
    }
}
