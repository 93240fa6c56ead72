// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Lumen explainer proxy.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides via the `LUMEN_` prefix.
//!
//! # Usage
//!
//! ```no_run
//! let config = lumen_config::load_and_validate().expect("config errors");
//! println!("listening on {}:{}", config.server.host, config.server.port);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

use lumen_core::LumenError;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{BackendConfig, HistoryConfig, LumenConfig, ServerConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that loads config from TOML files and
/// env vars via Figment, then runs post-deserialization validation. Both
/// failure modes collapse into [`LumenError::Config`] with every collected
/// message.
pub fn load_and_validate() -> Result<LumenConfig, LumenError> {
    let config = loader::load_config().map_err(|e| LumenError::Config(e.to_string()))?;
    validation::validate_config(&config).map_err(|errors| LumenError::Config(errors.join("; ")))?;
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<LumenConfig, LumenError> {
    let config =
        loader::load_config_from_str(toml_content).map_err(|e| LumenError::Config(e.to_string()))?;
    validation::validate_config(&config).map_err(|errors| LumenError::Config(errors.join("; ")))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_toml_loads_and_validates() {
        let config = load_and_validate_str(
            r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"

[backend]
api_key = "sk-123"
model = "qwen/qwen3-4b-fp8"

[history]
path = "/tmp/lumen-history.json"
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-123"));
        assert_eq!(config.history.path, "/tmp/lumen-history.json");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = load_and_validate_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.backend.api_key.is_none());
    }

    #[test]
    fn invalid_value_surfaces_as_config_error() {
        let err = load_and_validate_str("[server]\nlog_level = \"loud\"\n").unwrap_err();
        match err {
            LumenError::Config(msg) => assert!(msg.contains("log_level"), "got: {msg}"),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_surfaces_as_config_error() {
        let err = load_and_validate_str("[server]\nprot = 8080\n").unwrap_err();
        match err {
            LumenError::Config(msg) => {
                assert!(
                    msg.contains("unknown field") || msg.contains("prot"),
                    "got: {msg}"
                )
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
