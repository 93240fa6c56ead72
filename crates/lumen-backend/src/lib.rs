// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion backend adapters for the Lumen explainer proxy.
//!
//! Two implementations of [`CompletionBackend`] live here: [`NovitaBackend`]
//! speaks the OpenAI-compatible chat-completions wire format over HTTP, and
//! [`MockBackend`] synthesizes deterministic replies offline. The factory
//! picks one from credential presence, so callers hold a `dyn
//! CompletionBackend` and never branch on which path they got.

pub mod client;
pub mod extract;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use lumen_config::BackendConfig;
use lumen_core::prompt::system_prompt_for;
use lumen_core::think;
use lumen_core::{CompletionBackend, CompletionRequest, ExplanationLevel, LumenError};

use crate::client::NovitaClient;
use crate::extract::extract_explanation;
use crate::mock::MockBackend;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "NOVITA_API_KEY";

/// A key equal to this documented placeholder is treated as absent.
pub const PLACEHOLDER_API_KEY: &str = "your_novita_api_key_here";

/// Real completion backend speaking to a chat-completions endpoint.
pub struct NovitaBackend {
    client: NovitaClient,
    model: String,
}

impl NovitaBackend {
    pub fn new(client: NovitaClient, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl CompletionBackend for NovitaBackend {
    fn name(&self) -> &str {
        "novita"
    }

    async fn explain(
        &self,
        prompt: &str,
        level: ExplanationLevel,
    ) -> Result<String, LumenError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(LumenError::MissingPrompt);
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            system_prompt: system_prompt_for(level).to_string(),
            user_prompt: prompt.to_string(),
        };

        debug!(model = %request.model, %level, "sending completion request");
        let body = self.client.complete(&request).await?;
        let explanation = extract_explanation(&body)?;

        Ok(ensure_reasoning(explanation, prompt, level))
    }
}

/// Guarantees the explanation carries a reasoning segment.
///
/// When the upstream text already contains one, it passes through
/// unchanged; otherwise a short level-appropriate placeholder referencing
/// the prompt is prepended in the same sentinel format the mock path uses.
fn ensure_reasoning(explanation: String, prompt: &str, level: ExplanationLevel) -> String {
    if think::contains_reasoning(&explanation) {
        return explanation;
    }
    warn!(%level, "upstream reply lacked a reasoning segment, synthesizing one");
    format!(
        "{}{}{}\n\n{explanation}",
        think::THINK_OPEN,
        synthesized_thought(prompt, level),
        think::THINK_CLOSE
    )
}

/// Level-appropriate placeholder reasoning for replies that arrived bare.
fn synthesized_thought(prompt: &str, level: ExplanationLevel) -> String {
    match level {
        ExplanationLevel::Low => {
            format!("I need to explain {prompt} in simple terms for beginners.")
        }
        ExplanationLevel::High => {
            format!("I should provide a technical, in-depth explanation of {prompt}.")
        }
        ExplanationLevel::Medium => {
            format!("I'll give a clear step-by-step explanation of {prompt}.")
        }
    }
}

/// Resolves the effective API key: config value first, then the
/// `NOVITA_API_KEY` environment variable. Empty strings and the documented
/// placeholder count as absent.
fn resolve_api_key(config_key: &Option<String>) -> Option<String> {
    config_key
        .as_deref()
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
        .filter(|k| k != PLACEHOLDER_API_KEY)
}

/// Builds the completion backend the configuration calls for.
///
/// With a usable credential this is [`NovitaBackend`]; otherwise the
/// deterministic [`MockBackend`], which performs no network I/O.
pub fn backend_from_config(
    config: &BackendConfig,
) -> Result<Arc<dyn CompletionBackend>, LumenError> {
    match resolve_api_key(&config.api_key) {
        Some(api_key) => {
            let client = NovitaClient::new(api_key, config.api_url.clone())?;
            info!(model = %config.model, url = %config.api_url, "using live completion backend");
            Ok(Arc::new(NovitaBackend::new(client, config.model.clone())))
        }
        None => {
            info!("no API credential configured, using mock completion backend");
            Ok(Arc::new(MockBackend::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn live_backend(server: &MockServer) -> NovitaBackend {
        let client = NovitaClient::new("test-key".into(), server.uri()).unwrap();
        NovitaBackend::new(client, "qwen/qwen3-4b-fp8".into())
    }

    #[test]
    fn resolve_api_key_prefers_config_value() {
        assert_eq!(
            resolve_api_key(&Some("sk-config".into())),
            Some("sk-config".to_string())
        );
    }

    #[test]
    fn resolve_api_key_placeholder_counts_as_absent() {
        assert_eq!(resolve_api_key(&Some(PLACEHOLDER_API_KEY.into())), None);
    }

    #[test]
    fn factory_with_placeholder_selects_mock() {
        let config = BackendConfig {
            api_key: Some(PLACEHOLDER_API_KEY.into()),
            ..BackendConfig::default()
        };
        let backend = backend_from_config(&config).unwrap();
        assert_eq!(backend.name(), "mock");
    }

    #[test]
    fn factory_with_key_selects_live_backend() {
        let config = BackendConfig {
            api_key: Some("sk-live".into()),
            ..BackendConfig::default()
        };
        let backend = backend_from_config(&config).unwrap();
        assert_eq!(backend.name(), "novita");
    }

    #[tokio::test]
    async fn mock_path_embeds_prompt_with_reasoning() {
        let backend = MockBackend::new();
        let raw = backend
            .explain("photosynthesis", ExplanationLevel::Low)
            .await
            .unwrap();
        let parsed = think::split(&raw);
        assert!(!parsed.reasoning.unwrap().is_empty());
        assert!(parsed.answer.contains("photosynthesis"));
    }

    #[tokio::test]
    async fn empty_prompt_fails_before_any_request() {
        let server = MockServer::start().await;
        // No mock mounted: any request would panic the test server expectation.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = live_backend(&server)
            .explain("", ExplanationLevel::Medium)
            .await
            .unwrap_err();
        assert!(matches!(err, LumenError::MissingPrompt));
    }

    #[tokio::test]
    async fn bare_upstream_reply_gets_synthesized_reasoning() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "Gravity pulls masses together."}}]
            })))
            .mount(&server)
            .await;

        let raw = live_backend(&server)
            .explain("gravity", ExplanationLevel::High)
            .await
            .unwrap();
        let parsed = think::split(&raw);
        assert_eq!(
            parsed.reasoning.as_deref(),
            Some("I should provide a technical, in-depth explanation of gravity.")
        );
        assert_eq!(parsed.answer, "Gravity pulls masses together.");
    }

    #[tokio::test]
    async fn upstream_reasoning_is_not_double_wrapped() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "<think>native thought</think>\n\nAnswer text."}}]
            })))
            .mount(&server)
            .await;

        let raw = live_backend(&server)
            .explain("gravity", ExplanationLevel::Low)
            .await
            .unwrap();
        let parsed = think::split(&raw);
        assert_eq!(parsed.reasoning.as_deref(), Some("native thought"));
        assert_eq!(parsed.answer, "Answer text.");
    }

    #[tokio::test]
    async fn api_error_object_surfaces_as_backend_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "invalid api key"}
            })))
            .mount(&server)
            .await;

        let err = live_backend(&server)
            .explain("gravity", ExplanationLevel::Medium)
            .await
            .unwrap_err();
        match err {
            LumenError::Backend { message } => assert_eq!(message, "invalid api key"),
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unrecognized_shape_degrades_to_sentinel_with_reasoning() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "completely": "different"
            })))
            .mount(&server)
            .await;

        let raw = live_backend(&server)
            .explain("gravity", ExplanationLevel::Medium)
            .await
            .unwrap();
        let parsed = think::split(&raw);
        assert_eq!(parsed.answer, extract::EXTRACTION_SENTINEL);
        assert!(parsed.reasoning.is_some());
    }
}
