// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lumen explainer proxy.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Lumen configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LumenConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// History log settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Completion backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// API key for the completion service. `None` falls back to the
    /// `NOVITA_API_KEY` environment variable; with neither set (or the
    /// documented placeholder value), the mock backend is used.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.novita.ai/v3/openai/chat/completions".to_string()
}

fn default_model() -> String {
    "qwen/qwen3-4b-fp8".to_string()
}

/// History log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Path of the JSON history document.
    #[serde(default = "default_history_path")]
    pub path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

fn default_history_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("lumen/history.json").display().to_string())
        .unwrap_or_else(|| "lumen-history.json".to_string())
}
