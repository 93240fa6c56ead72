// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lumen explainer proxy.
//!
//! Provides the shared error enum, common types, the level-to-instruction
//! prompt table, the thinking/answer splitter, and the [`CompletionBackend`]
//! trait implemented by the backend crate.

pub mod backend;
pub mod error;
pub mod prompt;
pub mod think;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use backend::CompletionBackend;
pub use error::LumenError;
pub use types::{CompletionRequest, ExplanationLevel, HistoryRecord, ParsedExplanation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = LumenError::Config("test".into());
        let _missing = LumenError::MissingPrompt;
        let _backend = LumenError::Backend {
            message: "test".into(),
        };
        let _transport = LumenError::Transport {
            message: "test".into(),
            source: None,
        };
        let _storage = LumenError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = LumenError::Internal("test".into());
    }

    #[test]
    fn backend_trait_is_object_safe() {
        fn _assert(_: &dyn CompletionBackend) {}
    }
}
