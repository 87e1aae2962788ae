//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use agent_core::{
    pipeline::{Agent, AgentConfig},
    provider::{GenerationOptions, ModelInfo},
    AgentError,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub ollama_connected: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ollama_connected = state.provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        ollama_connected,
    })
}

/// List models available on the provider
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModelInfo>>, (StatusCode, Json<ErrorResponse>)> {
    let models = state.provider.list_models().await.map_err(|e| {
        tracing::warn!("model listing failed: {}", e);
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: e.user_message(),
                code: "PROVIDER_UNAVAILABLE".into(),
            }),
        )
    })?;

    Ok(Json(models))
}

/// Main chat endpoint: one query in, one final answer out.
///
/// Empty queries are rejected here so the pipeline only ever sees
/// validated input.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: AgentError::EmptyQuery.user_message(),
                code: "EMPTY_QUERY".into(),
            }),
        ));
    }

    let model = payload
        .model
        .unwrap_or_else(|| state.default_model.clone());

    let config = AgentConfig {
        generation: GenerationOptions::for_model(model.clone()),
    };
    let agent = Agent::new(state.provider.clone(), state.tools.clone(), config);

    let answer = agent.run(&payload.query).await.map_err(|e| {
        tracing::error!("Agent error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.user_message(),
                code: "AGENT_ERROR".into(),
            }),
        )
    })?;

    Ok(Json(ChatResponse { answer, model }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::provider::Completion;
    use agent_core::{LlmProvider, ToolRegistry};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CannedProvider;

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn health_check(&self) -> agent_core::Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            _prompt: &str,
            options: &GenerationOptions,
        ) -> agent_core::Result<Completion> {
            Ok(Completion {
                content: "```json\n{\"tool\": \"None\"}\n```".into(),
                model: options.model.clone(),
                usage: None,
            })
        }

        async fn list_models(&self) -> agent_core::Result<Vec<ModelInfo>> {
            Ok(Vec::new())
        }
    }

    fn test_state() -> AppState {
        AppState {
            provider: Arc::new(CannedProvider),
            tools: Arc::new(ToolRegistry::new()),
            default_model: "llama3.2".into(),
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_at_the_boundary() {
        for query in ["", "   ", "\n\t"] {
            let result = chat_handler(
                State(test_state()),
                Json(ChatRequest {
                    query: query.into(),
                    model: None,
                }),
            )
            .await;

            let (status, Json(body)) = result.err().expect("empty query must be rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.code, "EMPTY_QUERY");
        }
    }

    #[tokio::test]
    async fn test_chat_answers_with_requested_model() {
        let result = chat_handler(
            State(test_state()),
            Json(ChatRequest {
                query: "Hello".into(),
                model: Some("mistral".into()),
            }),
        )
        .await;

        let Json(body) = result.expect("chat should succeed");
        assert_eq!(body.model, "mistral");
        assert!(!body.answer.is_empty());
    }
}
