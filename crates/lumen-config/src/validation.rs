// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and recognized log levels.

use crate::model::LumenConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err` with all collected
/// validation messages (does not fail fast).
pub fn validate_config(config: &LumenConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push("server.host must not be empty".to_string());
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            ));
        }
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(format!(
            "server.log_level must be one of {LOG_LEVELS:?}, got `{}`",
            config.server.log_level
        ));
    }

    let api_url = config.backend.api_url.trim();
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        errors.push(format!(
            "backend.api_url must be an http(s) URL, got `{api_url}`"
        ));
    }

    if config.backend.model.trim().is_empty() {
        errors.push("backend.model must not be empty".to_string());
    }

    if config.history.path.trim().is_empty() {
        errors.push("history.path must not be empty".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
