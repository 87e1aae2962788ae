//! Application State

use std::sync::Arc;

use agent_core::{LlmProvider, ToolRegistry};

/// Shared application state
///
/// Provider and registry are long-lived and shared across all requests;
/// a lightweight `Agent` is assembled from them per request.
#[derive(Clone)]
pub struct AppState {
    /// LLM provider (Ollama, etc.)
    pub provider: Arc<dyn LlmProvider>,

    /// Tool registry with all available tools
    pub tools: Arc<ToolRegistry>,

    /// Model used when the request doesn't name one
    pub default_model: String,
}
