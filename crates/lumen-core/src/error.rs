// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lumen explainer proxy.

use thiserror::Error;

/// The primary error type used across all Lumen crates.
#[derive(Debug, Error)]
pub enum LumenError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller supplied an empty prompt. Signalled before any network activity.
    #[error("Prompt required")]
    MissingPrompt,

    /// The completion API returned an explicit error object.
    #[error("API Error: {message}")]
    Backend { message: String },

    /// Transport-level fault reaching the completion API (connection failure,
    /// non-JSON body, truncated read).
    #[error("AI API error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// History journal errors (file I/O, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors (server bind/serve failures).
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(LumenError::MissingPrompt.to_string(), "Prompt required");

        let backend = LumenError::Backend {
            message: "model not found".into(),
        };
        assert_eq!(backend.to_string(), "API Error: model not found");

        let transport = LumenError::Transport {
            message: "connection refused".into(),
            source: None,
        };
        assert_eq!(transport.to_string(), "AI API error: connection refused");
    }

    #[test]
    fn storage_error_wraps_source() {
        let err = LumenError::Storage {
            source: Box::new(std::io::Error::other("disk full")),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
