// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the chat-completions API.
//!
//! Issues exactly one `POST` per call: no retries, no explicit timeout
//! beyond the transport default. The body is parsed as JSON regardless of
//! HTTP status; API-level failures travel inside the body as an `error`
//! object and are handled by the extractor, while anything that prevents
//! obtaining a JSON body at all surfaces as a transport fault.

use lumen_core::{CompletionRequest, LumenError};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::debug;

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct NovitaClient {
    client: reqwest::Client,
    api_url: String,
}

impl NovitaClient {
    /// Creates a new client with bearer-token authentication.
    pub fn new(api_key: String, api_url: String) -> Result<Self, LumenError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| LumenError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LumenError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, api_url })
    }

    /// Sends one completion request and returns the raw JSON body.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<Value, LumenError> {
        let payload = json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt},
            ],
            "response_format": {"type": "text"},
            "stream": false,
        });

        let response = self
            .client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LumenError::Transport {
                message: format!("request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        let body = response.text().await.map_err(|e| LumenError::Transport {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        serde_json::from_str(&body).map_err(|e| LumenError::Transport {
            message: format!("response body is not JSON: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
