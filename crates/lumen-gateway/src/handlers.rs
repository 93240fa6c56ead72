// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the explainer REST API.
//!
//! Handles POST /api/explain, the history surface, and GET /health.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use lumen_core::{ExplanationLevel, LumenError, think};
use lumen_history::{GalleryEntry, render_gallery};

use crate::server::GatewayState;

/// Request body for POST /api/explain.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    /// Concept or question to explain.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Requested explanation level; anything unrecognized means medium.
    #[serde(default)]
    pub level: Option<String>,
}

/// Response body for POST /api/explain.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    /// Raw explanation, reasoning sentinels included.
    pub explanation: String,
}

/// Response body for GET /api/history.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    /// Gallery entries, newest first.
    pub entries: Vec<GalleryEntry>,
}

/// Response body for GET /api/history/{id}.
#[derive(Debug, Serialize)]
pub struct HistoryDetailResponse {
    pub id: i64,
    pub prompt: String,
    pub level: ExplanationLevel,
    /// Raw explanation as persisted.
    pub explanation: String,
    /// Reasoning preamble, when the explanation carries one.
    pub reasoning: Option<String>,
    /// Explanation with the reasoning segment removed.
    pub answer: String,
    pub timestamp: String,
}

/// Response body for DELETE /api/history/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Whether a record was removed.
    pub deleted: bool,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /api/explain
///
/// Validates the prompt, asks the backend for an explanation, appends the
/// exchange to the history log, and returns the raw explanation.
pub async fn post_explain(
    State(state): State<GatewayState>,
    Json(body): Json<ExplainRequest>,
) -> Response {
    let prompt = body.prompt.as_deref().map(str::trim).unwrap_or("");
    if prompt.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Prompt required");
    }
    let level = ExplanationLevel::from_param(body.level.as_deref());

    match state.backend.explain(prompt, level).await {
        Ok(explanation) => {
            // History is best-effort: a journal fault must not lose the
            // explanation the user is waiting on.
            if let Err(e) = state.history.append(prompt, level, &explanation) {
                warn!(error = %e, "failed to append history record");
            }
            (StatusCode::OK, Json(ExplainResponse { explanation })).into_response()
        }
        Err(LumenError::MissingPrompt) => {
            error_response(StatusCode::BAD_REQUEST, "Prompt required")
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /api/history
///
/// Returns the gallery projection, newest first.
pub async fn get_history(State(state): State<GatewayState>) -> Response {
    match state.history.all() {
        Ok(records) => (
            StatusCode::OK,
            Json(HistoryListResponse {
                entries: render_gallery(&records),
            }),
        )
            .into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /api/history/{id}
///
/// Returns one record with its reasoning and answer split out, for
/// re-opening a past exchange in the chat view.
pub async fn get_history_item(
    State(state): State<GatewayState>,
    Path(id): Path<i64>,
) -> Response {
    match state.history.find_by_id(id) {
        Ok(Some(record)) => {
            let parsed = think::split(&record.explanation);
            (
                StatusCode::OK,
                Json(HistoryDetailResponse {
                    id: record.id,
                    prompt: record.prompt,
                    level: record.level,
                    explanation: record.explanation,
                    reasoning: parsed.reasoning,
                    answer: parsed.answer,
                    timestamp: record.timestamp,
                }),
            )
                .into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Explanation not found"),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// DELETE /api/history/{id}
///
/// Removes one record; a missing id reports `deleted: false` rather than
/// an error.
pub async fn delete_history_item(
    State(state): State<GatewayState>,
    Path(id): Path<i64>,
) -> Response {
    match state.history.delete_by_id(id) {
        Ok(deleted) => (StatusCode::OK, Json(DeleteResponse { deleted })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
