// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The router is exposed on
//! its own so tests can drive it without binding a socket.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use lumen_core::{CompletionBackend, LumenError};
use lumen_history::HistoryStore;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Completion backend (mock or live, chosen at startup).
    pub backend: Arc<dyn CompletionBackend>,
    /// History log store.
    pub history: Arc<HistoryStore>,
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the application router.
///
/// Routes:
/// - POST /api/explain (a non-POST method on the path gets axum's 405)
/// - GET /api/history
/// - GET | DELETE /api/history/{id}
/// - GET /health
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/explain", post(handlers::post_explain))
        .route("/api/history", get(handlers::get_history))
        .route(
            "/api/history/{id}",
            get(handlers::get_history_item).delete(handlers::delete_history_item),
        )
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves the router until shutdown.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), LumenError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        LumenError::Internal(format!("failed to bind gateway to {addr}: {e}"))
    })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| LumenError::Internal(format!("gateway server error: {e}")))
}
