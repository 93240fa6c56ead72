// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly: wires config, backend, history store, and gateway.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lumen_config::LumenConfig;
use lumen_core::LumenError;
use lumen_gateway::{GatewayState, ServerConfig, start_server};
use lumen_history::{FileJournal, HistoryStore, SystemClock};

/// Runs the explainer proxy until shutdown.
pub async fn run(config: LumenConfig) -> Result<(), LumenError> {
    init_tracing(&config.server.log_level);

    let backend = lumen_backend::backend_from_config(&config.backend)?;
    tracing::info!(backend = backend.name(), "completion backend selected");

    let history = Arc::new(HistoryStore::new(
        Box::new(FileJournal::new(&config.history.path)),
        Box::new(SystemClock),
    ));
    tracing::info!(path = %config.history.path, "history log opened");

    let state = GatewayState { backend, history };
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    start_server(&server_config, state).await
}

/// Installs the fmt subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
